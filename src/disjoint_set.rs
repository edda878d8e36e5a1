// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
use std::convert::TryFrom;

use crate::error::MstError;

#[derive(Debug)]
pub struct DisjointSet {
	size: usize,
	parent: Vec<usize>,
	rank: Vec<usize>,
	initialized: bool,
}

impl DisjointSet {
	/// Puts every element of `0..size` in its own set.
	pub fn make_singletons(size: usize) -> Result<DisjointSet, MstError> {
		let mut parent = Vec::new();
		parent.try_reserve_exact(size)
			.map_err(|source| MstError::Allocation { what: "disjoint set parents", source })?;
		parent.extend(0..size);

		let mut rank = Vec::new();
		rank.try_reserve_exact(size)
			.map_err(|source| MstError::Allocation { what: "disjoint set ranks", source })?;
		rank.resize(size, 0);

		Ok(DisjointSet {
			size,
			parent,
			rank,
			initialized: true,
		})
	}

	pub fn size(&self) -> usize {
		self.size
	}

	pub fn parent(&self) -> &[usize] {
		&self.parent
	}

	pub fn rank(&self) -> &[usize] {
		&self.rank
	}

	pub fn is_initialized(&self) -> bool {
		self.initialized && self.parent.len() == self.size && self.rank.len() == self.size
	}

	fn index(&self, x: i64) -> Option<usize> {
		if !self.is_initialized() {
			return None;
		}
		usize::try_from(x).ok().filter(|&x| x < self.size)
	}

	/// Representative of `x`'s set. Every node on the way gets re-pointed
	/// straight at it. `None` for indices outside `0..size` and after teardown.
	pub fn find(&mut self, x: i64) -> Option<usize> {
		let x = self.index(x)?;
		Some(self.root(x))
	}

	fn root(&mut self, x: usize) -> usize {
		let parent = self.parent[x];
		if parent != x {
			self.parent[x] = self.root(parent);
		}
		self.parent[x]
	}

	/// Merges the sets holding `x` and `y`. On equal rank `y`'s root goes
	/// under `x`'s root. Returns false if nothing was merged.
	pub fn unite(&mut self, x: i64, y: i64) -> bool {
		let (x_root, y_root) = match (self.find(x), self.find(y)) {
			(Some(x_root), Some(y_root)) => (x_root, y_root),
			_ => return false,
		};
		if x_root == y_root {
			return false;
		}
		if self.rank[x_root] < self.rank[y_root] {
			self.parent[x_root] = y_root;
		} else if self.rank[x_root] > self.rank[y_root] {
			self.parent[y_root] = x_root;
		} else {
			self.parent[y_root] = x_root;
			self.rank[x_root] += 1;
		}
		true
	}

	pub fn num_sets(&self) -> usize {
		self.parent.iter().enumerate().filter(|&(i, &p)| i == p).count()
	}

	/// Frees both arrays. Safe to call more than once.
	pub fn teardown(&mut self) {
		self.parent = Vec::new();
		self.rank = Vec::new();
		self.size = 0;
		self.initialized = false;
	}
}
