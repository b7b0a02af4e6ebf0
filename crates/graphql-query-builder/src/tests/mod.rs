
/// Fails the test when `text` is not a syntactically valid executable document.
fn assert_parses(text: &str) {
    let error = cynic_parser::parse_executable_document(text)
        .err()
        .map(|err| err.to_string());

    pretty_assertions::assert_eq!(error, None, "`{text}` does not parse");
}
