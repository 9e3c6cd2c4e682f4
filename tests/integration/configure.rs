use optfile::{ConfigError, Diagnostic, DiagnosticKind, Flags, Registry, Slot};

use crate::common::{config_file, path_of};

#[test]
fn test_int_round_trip() {
    let file = config_file("retries=7\n");
    let retries = Slot::new(4_i64);
    let mut registry = Registry::new();
    registry.add_int(&retries, "retries", Flags::empty()).unwrap();

    registry.configure([path_of(&file)], false).unwrap();
    assert_eq!(retries.get(), 7);
}

#[test]
fn test_keys_match_case_insensitively() {
    let file = config_file("TIMEOUT=30\n");
    let timeout = Slot::new(0_i64);
    let mut registry = Registry::new();
    registry.add_int(&timeout, "timeout", Flags::empty()).unwrap();

    registry.configure([path_of(&file)], false).unwrap();
    assert_eq!(timeout.get(), 30);
}

#[test]
fn test_bad_value_keeps_default() {
    let file = config_file("retries=notanumber\n");
    let retries = Slot::new(4_i64);
    let mut registry = Registry::new();
    registry.add_int(&retries, "retries", Flags::empty()).unwrap();

    let mut diags: Vec<Diagnostic> = Vec::new();
    registry.configure_with([path_of(&file)], &mut diags).unwrap();
    assert_eq!(retries.get(), 4, "failed coercion must not touch the slot");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::CoercionFailure);
}

#[test]
fn test_configure_twice_is_idempotent() {
    let file = config_file("level=3\n");
    let level = Slot::new(0_i64);
    let mut registry = Registry::new();
    registry.add_int(&level, "level", Flags::empty()).unwrap();

    registry.configure([path_of(&file)], false).unwrap();
    registry.configure([path_of(&file)], false).unwrap();
    assert_eq!(level.get(), 3);
}

#[test]
fn test_string_flags_fold_value() {
    let file = config_file("login=  MixedCase  \n");
    let login = Slot::new(String::new());
    let mut registry = Registry::new();
    registry
        .add_string(&login, "login", Flags::STRIP | Flags::LOWER)
        .unwrap();

    registry.configure([path_of(&file)], false).unwrap();
    assert_eq!(login.get(), "mixedcase");
}

#[test]
fn test_unflagged_string_is_verbatim() {
    let file = config_file("motd=  Hello, World  \n");
    let motd = Slot::new(String::new());
    let mut registry = Registry::new();
    registry.add_string(&motd, "motd", Flags::empty()).unwrap();

    registry.configure([path_of(&file)], false).unwrap();
    assert_eq!(motd.get(), "  Hello, World  ");
}

#[test]
fn test_value_may_contain_equals() {
    let file = config_file("query=a=b=c\n");
    let query = Slot::new(String::new());
    let mut registry = Registry::new();
    registry.add_string(&query, "query", Flags::empty()).unwrap();

    registry.configure([path_of(&file)], false).unwrap();
    assert_eq!(query.get(), "a=b=c");
}

#[test]
fn test_bool_vocabulary() {
    let file = config_file("on=YES\noff=nil\nstays=maybe\n");
    let on = Slot::new(false);
    let off = Slot::new(true);
    let stays = Slot::new(true);
    let mut registry = Registry::new();
    registry.add_bool(&on, "on").unwrap();
    registry.add_bool(&off, "off").unwrap();
    registry.add_bool(&stays, "stays").unwrap();

    let mut diags: Vec<Diagnostic> = Vec::new();
    registry.configure_with([path_of(&file)], &mut diags).unwrap();
    assert!(on.get());
    assert!(!off.get());
    assert!(stays.get(), "unrecognized boolean must not touch the slot");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::CoercionFailure);
    assert_eq!(diags[0].line, 3);
}

#[test]
fn test_unsigned_discards_minus_sign() {
    let file = config_file("workers=-42\nscale=-12.6\n");
    let workers = Slot::new(0_i64);
    let scale = Slot::new(0.0_f64);
    let mut registry = Registry::new();
    registry.add_int(&workers, "workers", Flags::UNSIGNED).unwrap();
    registry.add_float(&scale, "scale", Flags::UNSIGNED).unwrap();

    registry.configure([path_of(&file)], false).unwrap();
    assert_eq!(workers.get(), 42);
    assert_eq!(scale.get(), 12.6);
}

#[test]
fn test_numeric_token_extracted_from_prose() {
    let file = config_file("port=listen on 8080 please\n");
    let port = Slot::new(0_i64);
    let mut registry = Registry::new();
    registry.add_int(&port, "port", Flags::empty()).unwrap();

    registry.configure([path_of(&file)], false).unwrap();
    assert_eq!(port.get(), 8080);
}

#[test]
fn test_double_dotted_float_rejected() {
    let file = config_file("ratio=1.2.3\n");
    let ratio = Slot::new(0.5_f64);
    let mut registry = Registry::new();
    registry.add_float(&ratio, "ratio", Flags::empty()).unwrap();

    let mut diags: Vec<Diagnostic> = Vec::new();
    registry.configure_with([path_of(&file)], &mut diags).unwrap();
    assert_eq!(ratio.get(), 0.5);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::CoercionFailure);
}

#[test]
fn test_comments_and_blanks_are_silent() {
    let file = config_file("# heading\n\n   \n  # indented comment\n");
    let registry = Registry::new();

    let mut diags: Vec<Diagnostic> = Vec::new();
    registry.configure_with([path_of(&file)], &mut diags).unwrap();
    assert!(diags.is_empty(), "nothing to report: {diags:?}");
}

#[test]
fn test_first_existing_candidate_wins() {
    let first = config_file("n=1\n");
    let second = config_file("n=2\n");
    let n = Slot::new(0_i64);
    let mut registry = Registry::new();
    registry.add_int(&n, "n", Flags::empty()).unwrap();

    registry
        .configure([path_of(&first), path_of(&second)], false)
        .unwrap();
    assert_eq!(n.get(), 1, "later candidates must not be merged in");
}

#[test]
fn test_missing_candidates_are_skipped() {
    let file = config_file("n=5\n");
    let n = Slot::new(0_i64);
    let mut registry = Registry::new();
    registry.add_int(&n, "n", Flags::empty()).unwrap();

    registry
        .configure(["/nonexistent/one.conf", path_of(&file)], false)
        .unwrap();
    assert_eq!(n.get(), 5);
}

#[test]
fn test_no_candidate_exists() {
    let registry = Registry::new();
    let err = registry
        .configure(["/nonexistent/a.conf", "/nonexistent/b.conf"], false)
        .unwrap_err();

    match err {
        ConfigError::NoFileFound { tried } => {
            assert_eq!(tried.len(), 2);
            assert_eq!(tried[0], "/nonexistent/a.conf");
        }
        other => panic!("expected NoFileFound, got {other:?}"),
    }
}
