use ariadne::{Fmt, Source};
use tarn_attrs::ErrorKind;
use tarn_error::{Error, EXPR};

#[derive(Debug, ErrorKind)]
#[error(
    message = format!("`{}` is not a known flag", self.flag),
    labels = ["given here"],
    help = format!("try {} instead", "--verbose".fg(EXPR)),
)]
struct UnknownFlag {
    flag: String,
}

#[derive(Debug, ErrorKind)]
#[error(
    message = "these spans overlap",
    labels = spans.iter().map(|_| String::new()).collect::<Vec<_>>(),
)]
struct Overlap;

/// Renders the report for the given error against the given source, with color codes removed.
fn render(err: Error, src: &str) -> String {
    let mut out = Vec::new();
    err.build_report("input")
        .write(("input", Source::from(src)), &mut out)
        .unwrap();
    String::from_utf8(strip_ansi_escapes::strip(&out)).unwrap()
}

#[test]
fn fields_in_scope() {
    let src = "tarn --vrebose";
    let err = Error::new(vec![5..14], UnknownFlag { flag: "--vrebose".to_string() });

    let plain = render(err, src);
    assert!(plain.contains("`--vrebose` is not a known flag"));
    assert!(plain.contains("given here"));
    assert!(plain.contains("try --verbose instead"));
}

#[test]
fn one_label_per_span() {
    let src = "a + b";
    let err = Error::new(vec![0..1, 4..5], Overlap);

    let plain = render(err, src);
    assert!(plain.contains("these spans overlap"));
}
