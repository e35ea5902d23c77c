use orgchart::resolve_path;
use tempfile::tempdir;

#[test]
fn resolve_path_keeps_absolute_paths() {
    let tmp = tempdir().expect("tempdir");
    let absolute = tmp.path().join("employees.csv");
    let resolved = resolve_path(absolute.to_str().expect("utf8 path")).expect("resolve");
    assert_eq!(resolved, absolute);
}

#[test]
fn resolve_path_joins_missing_relative_paths_onto_cwd() {
    let resolved = resolve_path("definitely-missing-employees.csv").expect("resolve");
    let cwd = std::env::current_dir().expect("cwd");
    assert_eq!(resolved, cwd.join("definitely-missing-employees.csv"));
}
