//! End-to-end create and merge tests over real and in-memory filesystems.

use std::fs;
use std::path::{Path, PathBuf};

use quire_adapters::{LocalFilesystem, MemoryFilesystem, MemoryStaging, SerdeCodec, TempDirStaging};
use quire_core::{
    application::{
        ApplicationError,
        ports::Filesystem,
        services::merger,
    },
    domain::{ConflictPolicy, Format, Permissions},
    error::QuireError,
    prelude::*,
};
use tempfile::TempDir;

fn local_service(dest: &Path, scratch: &Path) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(SerdeCodec::new()),
        Box::new(TempDirStaging::in_dir(scratch)),
        Box::new(LocalFilesystem::new(dest)),
    )
}

fn listing(root: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<_> = walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    paths.sort();
    paths
}

#[test]
fn create_produces_the_document_layout() {
    let dest = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    let service = local_service(dest.path(), scratch.path());

    let outcome = service.create(&CreateOptions::new("example")).unwrap();
    assert!(matches!(outcome, CreateOutcome::Created { .. }));

    assert_eq!(
        listing(dest.path()),
        [
            PathBuf::from("example.toml"),
            PathBuf::from("resources"),
            PathBuf::from("src"),
            PathBuf::from("src/main.md"),
        ]
    );
    assert!(fs::read(dest.path().join("src/main.md")).unwrap().is_empty());
    assert!(
        fs::read_dir(dest.path().join("resources"))
            .unwrap()
            .next()
            .is_none()
    );

    let config = service.load(Path::new("example.toml")).unwrap();
    assert_eq!(config.name(), "example");
    assert_eq!(config.version(), "0.0.1");

    // Staging directories are gone.
    assert!(listing(scratch.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn staged_modes_reach_the_destination() {
    use std::os::unix::fs::PermissionsExt;

    let dest = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    local_service(dest.path(), scratch.path())
        .create(&CreateOptions::new("example").with_format(Format::Yaml))
        .unwrap();

    let mode = |p: &str| {
        fs::metadata(dest.path().join(p))
            .unwrap()
            .permissions()
            .mode()
            & 0o777
    };
    assert_eq!(mode("example.yaml"), 0o644);
    assert_eq!(mode("src/main.md"), 0o644);
}

#[test]
fn second_create_is_a_noop_unless_strict() {
    let dest = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    let service = local_service(dest.path(), scratch.path());
    let options = CreateOptions::new("example").with_license("MIT");

    service.create(&options).unwrap();
    fs::write(dest.path().join("src/main.md"), "# Chapter one\n").unwrap();

    let outcome = service.create(&options).unwrap();
    assert_eq!(
        outcome,
        CreateOutcome::AlreadyExists {
            path: "example.toml".into()
        }
    );
    assert_eq!(
        fs::read_to_string(dest.path().join("src/main.md")).unwrap(),
        "# Chapter one\n"
    );

    let err = service.create(&options.clone().strict(true)).unwrap_err();
    assert!(matches!(
        err,
        QuireError::Application(ApplicationError::ConfigExists { .. })
    ));
}

#[test]
fn existing_config_in_another_format_counts() {
    let dest = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    fs::write(dest.path().join("example.json"), "{\"name\":\"example\"}").unwrap();

    let outcome = local_service(dest.path(), scratch.path())
        .create(&CreateOptions::new("example"))
        .unwrap();
    assert!(matches!(outcome, CreateOutcome::AlreadyExists { .. }));
    assert!(!dest.path().join("example.toml").exists());
}

#[test]
fn keep_policy_preserves_existing_documents() {
    let dest = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    fs::create_dir(dest.path().join("src")).unwrap();
    fs::write(dest.path().join("src/main.md"), "draft").unwrap();

    let outcome = local_service(dest.path(), scratch.path())
        .create(&CreateOptions::new("example").with_policy(ConflictPolicy::Keep))
        .unwrap();

    let CreateOutcome::Created { report, .. } = outcome else {
        panic!("expected a created project");
    };
    assert_eq!(report.files_kept, 1);
    assert_eq!(report.files_copied, 1);
    assert_eq!(
        fs::read_to_string(dest.path().join("src/main.md")).unwrap(),
        "draft"
    );
}

#[test]
fn overwrite_policy_replaces_existing_documents() {
    let dest = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    fs::create_dir(dest.path().join("src")).unwrap();
    fs::write(dest.path().join("src/main.md"), "draft").unwrap();

    local_service(dest.path(), scratch.path())
        .create(&CreateOptions::new("example"))
        .unwrap();

    assert_eq!(
        fs::read_to_string(dest.path().join("src/main.md")).unwrap(),
        ""
    );
}

#[cfg(unix)]
#[test]
fn overwrite_policy_replaces_the_mode_too() {
    use std::os::unix::fs::PermissionsExt;

    let dest = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    let main = dest.path().join("src/main.md");
    fs::create_dir(dest.path().join("src")).unwrap();
    fs::write(&main, "draft").unwrap();
    fs::set_permissions(&main, fs::Permissions::from_mode(0o600)).unwrap();

    let outcome = local_service(dest.path(), scratch.path())
        .create(&CreateOptions::new("example").with_policy(ConflictPolicy::Overwrite))
        .unwrap();

    let CreateOutcome::Created { report, .. } = outcome else {
        panic!("expected a created project");
    };
    assert_eq!(report.files_overwritten, 1);
    // src/ was already there; only resources/ is new.
    assert_eq!(report.directories_created, 1);
    assert_eq!(
        fs::metadata(&main).unwrap().permissions().mode() & 0o777,
        0o644
    );
}

#[test]
fn error_policy_leaves_earlier_entries_in_place() {
    let dest = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    fs::create_dir(dest.path().join("src")).unwrap();
    fs::write(dest.path().join("src/main.md"), "draft").unwrap();

    let err = local_service(dest.path(), scratch.path())
        .create(&CreateOptions::new("example").with_policy(ConflictPolicy::Error))
        .unwrap_err();

    assert_eq!(
        err,
        QuireError::from(ApplicationError::MergeConflict {
            path: "src/main.md".into()
        })
    );
    // Walk order: example.toml, resources/, src/, src/main.md.
    assert!(dest.path().join("example.toml").is_file());
    assert!(dest.path().join("resources").is_dir());
    assert_eq!(
        fs::read_to_string(dest.path().join("src/main.md")).unwrap(),
        "draft"
    );
    assert!(listing(scratch.path()).is_empty());
}

#[test]
fn preview_lists_conflicts_without_writing() {
    let dest = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    fs::create_dir(dest.path().join("src")).unwrap();
    fs::write(dest.path().join("src/main.md"), "draft").unwrap();

    let outcome = local_service(dest.path(), scratch.path())
        .preview(&CreateOptions::new("example"))
        .unwrap();

    assert_eq!(
        outcome,
        PreviewOutcome::WouldCreate {
            conflicts: vec![PathBuf::from("src/main.md")]
        }
    );
    assert_eq!(
        listing(dest.path()),
        [PathBuf::from("src"), PathBuf::from("src/main.md")]
    );
}

#[test]
fn preview_agrees_with_create_once_configured() {
    let staging = MemoryStaging::new();
    let destination = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Box::new(SerdeCodec::new()),
        Box::new(staging.clone()),
        Box::new(destination.clone()),
    );
    let options = CreateOptions::new("example");
    service.create(&options).unwrap();

    let preview = service.preview(&options).unwrap();
    let outcome = service.create(&options).unwrap();
    assert_eq!(
        preview,
        PreviewOutcome::AlreadyExists {
            path: "example.toml".into()
        }
    );
    assert_eq!(
        outcome,
        CreateOutcome::AlreadyExists {
            path: "example.toml".into()
        }
    );

    let strict = options.strict(true);
    assert_eq!(
        service.preview(&strict).unwrap_err(),
        service.create(&strict).unwrap_err()
    );
    // Only the first create needed a workspace.
    assert_eq!(staging.acquired(), 1);
}

#[test]
fn merge_is_a_union_of_both_trees() {
    let origin = MemoryFilesystem::new();
    origin
        .create_dir_all(Path::new("a/b"), Permissions::directory())
        .unwrap();
    origin
        .write_file(Path::new("a/b/one.md"), b"1", Permissions::file())
        .unwrap();
    origin
        .write_file(Path::new("top.md"), b"top", Permissions::file())
        .unwrap();

    let destination = MemoryFilesystem::new();
    destination
        .create_dir_all(Path::new("a"), Permissions::from_mode(0o700))
        .unwrap();
    destination
        .write_file(Path::new("a/mine.md"), b"mine", Permissions::file())
        .unwrap();

    let report = merger::merge(
        &origin,
        &destination,
        Path::new(""),
        ConflictPolicy::Overwrite,
    )
    .unwrap();

    assert_eq!(report.files_copied, 2);
    for path in origin.paths() {
        assert!(destination.exists(&path), "{} missing", path.display());
    }
    assert_eq!(
        destination.read_to_string(Path::new("a/mine.md")).unwrap(),
        "mine"
    );
    // Pre-existing directories keep their mode.
    assert_eq!(
        destination.permissions(Path::new("a")).unwrap().mode(),
        0o700
    );
}

#[test]
fn merge_from_a_subtree() {
    let origin = MemoryFilesystem::new();
    origin
        .create_dir_all(Path::new("src/notes"), Permissions::directory())
        .unwrap();
    origin
        .write_file(Path::new("src/notes/a.md"), b"a", Permissions::file())
        .unwrap();
    origin
        .write_file(Path::new("outside.md"), b"", Permissions::file())
        .unwrap();

    let destination = MemoryFilesystem::new();
    merger::merge(
        &origin,
        &destination,
        Path::new("src"),
        ConflictPolicy::Overwrite,
    )
    .unwrap();

    assert!(destination.is_dir(Path::new("src/notes")));
    assert!(destination.is_file(Path::new("src/notes/a.md")));
    assert!(!destination.exists(Path::new("outside.md")));
}

#[test]
fn file_where_a_directory_is_expected_fails() {
    let dest = TempDir::new().unwrap();
    let scratch = TempDir::new().unwrap();
    fs::write(dest.path().join("src"), "not a directory").unwrap();

    let err = local_service(dest.path(), scratch.path())
        .create(&CreateOptions::new("example"))
        .unwrap_err();
    assert!(matches!(
        err,
        QuireError::Application(ApplicationError::Filesystem { .. })
    ));
}

#[test]
fn in_memory_run_releases_its_workspace() {
    let staging = MemoryStaging::new();
    let destination = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Box::new(SerdeCodec::new()),
        Box::new(staging.clone()),
        Box::new(destination.clone()),
    );

    service
        .create(&CreateOptions::new("notes").with_format(Format::Json))
        .unwrap();
    assert!(destination.is_file(Path::new("notes.json")));
    assert!(destination.is_dir(Path::new("resources")));

    let err = service
        .create(&CreateOptions::new("other").with_policy(ConflictPolicy::Error))
        .unwrap_err();
    assert!(matches!(
        err,
        QuireError::Application(ApplicationError::MergeConflict { .. })
    ));

    assert_eq!(staging.acquired(), 2);
    assert_eq!(staging.released(), 2);
}
