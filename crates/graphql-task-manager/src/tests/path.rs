use pretty_assertions::assert_eq;

use crate::{MutationPath, MutationPathError};

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct FormSettings {
    mutation_path: MutationPath,
}

#[test]
fn parses_dot_path() {
    let path: MutationPath = "admin.users".parse().unwrap();

    assert_eq!(path.segments(), ["admin", "users"]);
    assert_eq!(path.innermost(), Some("users"));
    assert_eq!(path.wrappers().collect::<Vec<_>>(), vec!["admin"]);
    assert_eq!(path.to_string(), "admin.users");
}

#[test]
fn single_segment() {
    let path: MutationPath = "createUsers".parse().unwrap();

    assert_eq!(path.innermost(), Some("createUsers"));
    assert_eq!(path.wrappers().count(), 0);
}

#[test]
fn wrappers_go_outward_and_skip_empty_segments() {
    let path: MutationPath = "a..b.c".parse().unwrap();

    assert_eq!(path.wrappers().collect::<Vec<_>>(), vec!["b", "a"]);
}

#[test]
fn needs_a_trailing_field_name() {
    assert_eq!(
        "".parse::<MutationPath>(),
        Err(MutationPathError::MissingFieldName(String::new()))
    );
    assert_eq!(
        "admin.".parse::<MutationPath>(),
        Err(MutationPathError::MissingFieldName("admin.".into()))
    );
}

#[test]
fn rejects_invalid_names() {
    let error = "admin.user list".parse::<MutationPath>().unwrap_err();

    insta::assert_snapshot!(error, @"`user list` in the mutation path `admin.user list` is not a valid GraphQL name");
    assert!("9lives.users".parse::<MutationPath>().is_err());
}

#[test]
fn built_paths_may_lack_a_name() {
    assert_eq!(MutationPath::default().innermost(), None);
    assert_eq!(MutationPath::from(vec![String::from("admin"), String::new()]).innermost(), None);
}

#[test]
fn loads_from_toml() {
    let settings: FormSettings = toml::from_str(r#"mutation_path = "shop.catalog.products""#).unwrap();

    assert_eq!(settings.mutation_path.segments(), ["shop", "catalog", "products"]);
    insta::assert_snapshot!(
        toml::to_string(&settings).unwrap().trim_end(),
        @r#"mutation_path = "shop.catalog.products""#
    );
}

#[test]
fn invalid_path_in_toml() {
    let error = toml::from_str::<FormSettings>(r#"mutation_path = "shop.""#).unwrap_err();

    assert!(error.to_string().contains("must end with a field name"));
}
