use mailfixture_core::rules::ClusterPolicy;
use mailfixture_gen::{rng_from_seed, run, GenError, GenerateOptions, RenderOptions, RunOptions};
use std::error::Error as _;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const JANE: &str = r#"{"name":"Jane","email":"jane@x.com","date":"2021,1,1","time":100,"reply":0,"send":1,"subject":"Hi"}"#;

fn options(dir: &Path, clustering: ClusterPolicy) -> RunOptions {
    RunOptions {
        input_dir: dir.join("fake_data"),
        output: dir.join("src").join("generated.rs"),
        generate: GenerateOptions {
            clustering,
            ..GenerateOptions::default()
        },
        render: RenderOptions::default(),
    }
}

fn write_fixture(dir: &Path, name: &str, contents: &str) {
    let data_dir = dir.join("fake_data");
    fs::create_dir_all(&data_dir).expect("create data dir");
    fs::write(data_dir.join(name), contents).expect("write fixture");
}

fn declared_size(module: &str) -> usize {
    let start = module.find("[Entry; ").expect("array type") + "[Entry; ".len();
    let end = start + module[start..].find(']').expect("closing bracket");
    module[start..end].parse().expect("size")
}

#[test]
fn single_record_renders_exact_literal() {
    let temp = TempDir::new().expect("temp dir");
    write_fixture(temp.path(), "inbox.json", &format!("[{JANE}]"));
    let options = options(temp.path(), ClusterPolicy::disabled());

    let report = run(&options, &mut rng_from_seed(None)).expect("run");
    assert_eq!(report.total_entries, 1);

    let module = fs::read_to_string(&options.output).expect("read output");
    assert_eq!(
        module,
        "\nuse super::database::Entry;\npub const ENTRIES: [Entry; 1] = [\n\
         Entry { sender_name: \"Jane\", sender_domain: \"x.com\", sender_local_part: \"jane\", \
         year: 2021, month: 1, day: 1, timestamp: 100, is_reply: false, is_send: true, \
         subject: \"Hi\", to_address: \"john@doe.com\", to_name: \"\" }\n];\n"
    );
}

#[test]
fn declared_size_matches_rendered_literals() {
    let temp = TempDir::new().expect("temp dir");
    let many = vec![JANE; 25].join(",");
    write_fixture(temp.path(), "a.json", &format!("[{many}]"));
    write_fixture(temp.path(), "b.json", &format!("[{JANE},{JANE}]"));
    let options = options(temp.path(), ClusterPolicy::default());

    let report = run(&options, &mut rng_from_seed(Some(2024))).expect("run");
    let module = fs::read_to_string(&options.output).expect("read output");

    let literals = module.matches("Entry { ").count();
    assert_eq!(declared_size(&module), literals);
    assert_eq!(report.total_entries, literals);
    assert_eq!(report.source_records, 27);
    assert_eq!(
        report.total_entries,
        report.source_records + report.clustered_records
    );
    assert!(report.clustered_records <= report.source_records);
    assert!(module.lines().all(|line| !line.starts_with("Entry {")
        || line.contains("to_address: \"john@doe.com\", to_name: \"\" }")));
}

#[test]
fn empty_input_directory_renders_empty_array() {
    let temp = TempDir::new().expect("temp dir");
    fs::create_dir_all(temp.path().join("fake_data")).expect("create data dir");
    let options = options(temp.path(), ClusterPolicy::default());

    let report = run(&options, &mut rng_from_seed(Some(1))).expect("run");
    assert!(report.input_files.is_empty());
    let module = fs::read_to_string(&options.output).expect("read output");
    assert!(module.contains("pub const ENTRIES: [Entry; 0] = ["));
}

#[test]
fn unsupported_type_aborts_before_writing() {
    let temp = TempDir::new().expect("temp dir");
    let bad = JANE.replace("\"subject\":\"Hi\"", "\"subject\":null");
    write_fixture(temp.path(), "inbox.json", &format!("[{JANE},{bad}]"));
    let options = options(temp.path(), ClusterPolicy::disabled());

    let err = run(&options, &mut rng_from_seed(Some(1))).unwrap_err();
    assert!(matches!(err, GenError::InvalidRecord { index: 1, .. }));
    let cause = err.source().expect("cause").to_string();
    assert!(cause.contains("field `subject`: null"), "{cause}");
    assert!(!options.output.exists());
}

#[test]
fn malformed_record_keeps_previous_output() {
    let temp = TempDir::new().expect("temp dir");
    let bad = JANE.replace("jane@x.com", "jane.x.com");
    write_fixture(temp.path(), "inbox.json", &format!("[{bad}]"));
    let options = options(temp.path(), ClusterPolicy::disabled());
    fs::create_dir_all(options.output.parent().expect("parent")).expect("create src");
    fs::write(&options.output, "previous").expect("seed output");

    assert!(run(&options, &mut rng_from_seed(Some(1))).is_err());
    assert_eq!(
        fs::read_to_string(&options.output).expect("read output"),
        "previous"
    );
}

#[test]
fn invalid_json_file_fails_run() {
    let temp = TempDir::new().expect("temp dir");
    write_fixture(temp.path(), "broken.json", "[{");
    let options = options(temp.path(), ClusterPolicy::disabled());

    let err = run(&options, &mut rng_from_seed(Some(1))).unwrap_err();
    assert!(matches!(err, GenError::ParseFile { .. }));
    assert!(!options.output.exists());
}
