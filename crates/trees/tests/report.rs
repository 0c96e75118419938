use pretty_assertions::assert_eq;
use trees::strategy::Arena;

fn output(n: i32) -> String {
    let mut out = Vec::new();
    trees::run(n, &mut out).expect("run failed");

    String::from_utf8(out).expect("report is not utf-8")
}

#[test]
fn test_small_run_output() {
    let expected = "stretch tree of depth 7\t check: 255\n\
                    64\t trees of depth 4\t check: 1984\n\
                    16\t trees of depth 6\t check: 2032\n\
                    long lived tree of depth 6\t check: 255\n";

    assert_eq!(output(4), expected);
}

#[test]
fn test_zero_matches_minimum() {
    assert_eq!(output(0), output(4));
    assert_eq!(output(0), output(6));
}

#[test]
fn test_negative_matches_minimum() {
    assert_eq!(output(-3), output(4));
    assert_eq!(output(i32::MIN), output(4));
}

#[test]
fn test_line_counts() {
    // stretch + one per depth + long lived
    assert_eq!(output(4).lines().count(), 4);
    assert_eq!(output(10).lines().count(), 6);
    assert_eq!(output(11).lines().count(), 6);
}

#[test]
fn test_larger_run_output() {
    let expected = "stretch tree of depth 11\t check: 4095\n\
                    1024\t trees of depth 4\t check: 31744\n\
                    256\t trees of depth 6\t check: 32512\n\
                    64\t trees of depth 8\t check: 32704\n\
                    16\t trees of depth 10\t check: 32752\n\
                    long lived tree of depth 10\t check: 4095\n";

    assert_eq!(output(10), expected);
}

#[test]
fn test_arena_output_matches() {
    let mut out = Vec::new();
    trees::run_with(10, &mut Arena::new(), &mut out).expect("run failed");

    assert_eq!(String::from_utf8(out).unwrap(), output(10));
}

#[test]
fn test_write_failure_is_reported() {
    struct Closed;

    impl std::io::Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let actual = trees::run(4, &mut Closed);

    assert!(matches!(actual, Err(trees::Error::Io(_))));
}
