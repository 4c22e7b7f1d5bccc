//! Round-trip and decoding tests for the serde codec.

use proptest::prelude::*;
use quire_adapters::SerdeCodec;
use quire_core::{
    application::ports::ConfigCodec,
    domain::{Author, FileEntry, Format, ProjectConfig},
};

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._@:/-]{0,16}"
}

fn config() -> impl Strategy<Value = ProjectConfig> {
    (
        text(),
        text(),
        "[a-zA-Z0-9 .,]{0,32}",
        prop::collection::vec(text(), 0..4),
        prop::collection::vec((text(), text(), text()), 0..4),
        prop::collection::vec((text(), text(), text()), 0..4),
    )
        .prop_map(|(name, version, description, licenses, authors, files)| {
            let mut config = ProjectConfig::new(name, version, description.trim());
            for license in licenses {
                config.add_license(license);
            }
            for (name, url, email) in authors {
                config.add_author(Author::new(name).with_url(url).with_email(email));
            }
            for (name, output, path) in files {
                config.add_file(FileEntry::new(name, output, path));
            }
            config
        })
}

fn format() -> impl Strategy<Value = Format> {
    prop::sample::select(Format::ALL.to_vec())
}

proptest! {
    #[test]
    fn decode_inverts_encode(config in config(), format in format()) {
        let codec = SerdeCodec::new();
        let bytes = codec.encode(&config, format).unwrap();
        let decoded = codec.decode(&bytes, format).unwrap();
        prop_assert_eq!(decoded, config);
    }
}

#[test]
fn sample_config_through_json() {
    let mut config = ProjectConfig::new("sample", "0.0.1", "Some description");
    config.add_license("GPL-3.0-or-later");
    config.add_author(
        Author::new("carddamom")
            .with_url("https://github.com/carddamom")
            .with_email("carddamom@tutanota.com"),
    );

    let codec = SerdeCodec::new();
    let bytes = codec.encode(&config, Format::Json).unwrap();
    let decoded = codec.decode(&bytes, Format::Json).unwrap();

    assert_eq!(decoded.name(), "sample");
    assert!(decoded.contains_license("GPL-3.0-or-later"));
    assert_eq!(decoded, config);
}

#[test]
fn formats_are_not_interchangeable_on_decode() {
    let codec = SerdeCodec::new();
    let config = ProjectConfig::new("sample", "0.0.1", "");
    let toml = codec.encode(&config, Format::Toml).unwrap();

    assert!(codec.decode(&toml, Format::Json).is_err());
}
