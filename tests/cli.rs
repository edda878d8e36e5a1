use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn write_input(name: &str, contents: &str) -> PathBuf {
	let path = std::env::temp_dir().join(format!("extended_mst_cli_{}_{}.txt", name, std::process::id()));
	fs::write(&path, contents).unwrap();
	path
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_extended_mst"))
		.args(args)
		.output()
		.unwrap()
}

fn run_on(name: &str, contents: &str, extra: &[&str]) -> Output {
	let path = write_input(name, contents);
	let path_str = path.to_str().unwrap().to_string();
	let mut args: Vec<&str> = extra.to_vec();
	args.push(&path_str);
	let output = run(&args);
	let _ = fs::remove_file(&path);
	output
}

#[test]
fn square_graph_report() {
	let out = run_on("square", "4 4\n0 0 0 0\n0 1 1\n1 2 2\n2 3 3\n3 0 4\n", &["-q"]);
	assert!(out.status.success());
	assert_eq!(
		String::from_utf8_lossy(&out.stdout),
		"TOTAL_COST:6\nMST_EDGES_START\n0,1,1,0,0,1\n1,2,2,0,0,2\n2,3,3,0,0,3\nMST_EDGES_END\n"
	);
}

#[test]
fn disconnected_graph_prints_sentinel_and_exits_zero() {
	let out = run_on("split", "3 1\n0 0 0\n0 1 5\n", &[]);
	assert!(out.status.success());
	assert_eq!(String::from_utf8_lossy(&out.stdout), "TOTAL_COST:-1\n");
}

#[test]
fn negative_weights_give_negative_total() {
	let out = run_on("negative", "2 1\n-10 -10\n0 1 5\n", &[]);
	assert!(out.status.success());
	assert_eq!(
		String::from_utf8_lossy(&out.stdout),
		"TOTAL_COST:-15\nMST_EDGES_START\n0,1,5,-10,-10,-15\nMST_EDGES_END\n"
	);
}

#[test]
fn single_vertex_prints_empty_block() {
	let out = run_on("single", "1 0\n3\n", &[]);
	assert!(out.status.success());
	assert_eq!(String::from_utf8_lossy(&out.stdout), "TOTAL_COST:0\nMST_EDGES_START\nMST_EDGES_END\n");
}

#[test]
fn json_format() {
	let out = run_on("json", "2 1\n1 2\n0 1 3\n", &["--format", "json"]);
	assert!(out.status.success());
	let stdout = String::from_utf8_lossy(&out.stdout);
	assert!(stdout.contains("\"total_cost\": 6"));
	assert!(stdout.contains("\"c_e\": 6"));
}

#[test]
fn input_failures_exit_non_zero() {
	let missing_arg = run(&[]);
	assert!(!missing_arg.status.success());
	assert!(String::from_utf8_lossy(&missing_arg.stderr).contains("<INPUT>"));

	let bad_format = run(&["--format", "xml", "graph.txt"]);
	assert!(!bad_format.status.success());

	let missing_file = run(&["/definitely/not/here.txt"]);
	assert!(!missing_file.status.success());

	let short = run_on("short", "3 2\n0 0 0\n0 1 1\n", &[]);
	assert!(!short.status.success());
	assert!(short.stdout.is_empty());

	let garbage = run_on("garbage", "three 2\n", &[]);
	assert!(!garbage.status.success());

	let inflated = run_on("inflated", "0 100000000000000\n", &[]);
	assert_eq!(inflated.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&inflated.stderr).contains("first endpoint of edge 0"));
}
