#[cfg(all(test, unix))]
mod batch_tests {
    use crate::batch::convert::test_fonts::tiny_font;
    use crate::batch::BatchDriver;
    use crate::core::BatchSettings;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Copies the input to `--output-file` and logs each call. Inputs whose
    /// name contains "broken" fail; "silent" ones succeed without output.
    const FAKE_SUBSETTER: &str = r#"
in="$1"; shift
out=""
for arg in "$@"; do
  case "$arg" in
    --output-file=*) out="${arg#--output-file=}" ;;
  esac
done
echo "$in" >> "$(dirname "$0")/calls.log"
case "$in" in
  *broken*) echo "cannot subset $in" >&2; exit 1 ;;
  *silent*) exit 0 ;;
esac
cp "$in" "$out"
"#;

    struct Workspace {
        temp: TempDir,
    }

    impl Workspace {
        fn new() -> Self {
            let temp = TempDir::new().unwrap();
            fs::create_dir(temp.path().join("fonts")).unwrap();
            fs::create_dir(temp.path().join("tool")).unwrap();
            fs::write(temp.path().join("tool").join("subset.sh"), FAKE_SUBSETTER).unwrap();
            fs::write(temp.path().join("content.txt"), "Hello").unwrap();
            Self { temp }
        }

        fn src(&self) -> PathBuf {
            self.temp.path().join("fonts")
        }

        fn dist(&self) -> PathBuf {
            self.temp.path().join("out").join("dist")
        }

        fn add_font(&self, name: &str, data: &[u8]) {
            fs::write(self.src().join(name), data).unwrap();
        }

        fn settings(&self) -> BatchSettings {
            let script = self.temp.path().join("tool").join("subset.sh");
            BatchSettings {
                src_dir: self.src(),
                dist_dir: self.dist(),
                text_file: self.temp.path().join("content.txt"),
                subsetter: format!("sh {}", script.display()),
                subsetter_args: Vec::new(),
            }
        }

        fn calls(&self) -> Vec<String> {
            fs::read_to_string(self.temp.path().join("tool").join("calls.log"))
                .unwrap_or_default()
                .lines()
                .map(|line| {
                    Path::new(line)
                        .file_name()
                        .unwrap()
                        .to_string_lossy()
                        .into_owned()
                })
                .collect()
        }

        fn dist_files(&self) -> Vec<String> {
            let mut names: Vec<_> = fs::read_dir(self.dist())
                .unwrap()
                .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            names
        }
    }

    #[tokio::test]
    async fn test_every_font_is_subset_and_converted() {
        let ws = Workspace::new();
        ws.add_font("Alpha.otf", &tiny_font(10));
        ws.add_font("Beta.ttf", &tiny_font(20));

        let summary = BatchDriver::new(ws.settings()).run().await.unwrap();

        assert!(!summary.aborted);
        assert_eq!(summary.discovered, 2);
        assert_eq!(ws.calls(), vec!["Alpha.otf", "Beta.ttf"]);
        // Beta.ttf is both the subset output and the converted output.
        assert_eq!(ws.dist_files(), vec!["Alpha.otf", "Alpha.ttf", "Beta.ttf"]);

        let counts = summary.counts();
        assert_eq!(counts.subset, 2);
        assert_eq!(counts.converted, 2);
        assert_eq!(counts.failed, 0);

        let alpha = &summary.files[0];
        assert_eq!(alpha.subset_size, Some(alpha.original_size));
        assert_eq!(alpha.compression_ratio, Some(0.0));
        assert_eq!(alpha.ttf_path, Some(ws.dist().join("Alpha.ttf")));
    }

    #[tokio::test]
    async fn test_dist_directory_is_created_even_without_fonts() {
        let ws = Workspace::new();
        assert!(!ws.dist().exists());

        let summary = BatchDriver::new(ws.settings()).run().await.unwrap();

        assert!(ws.dist().is_dir());
        assert_eq!(summary.discovered, 0);
        assert!(summary.files.is_empty());
        assert!(ws.calls().is_empty());
    }

    #[tokio::test]
    async fn test_failed_subset_does_not_stop_the_batch() {
        let ws = Workspace::new();
        ws.add_font("A-broken.otf", &tiny_font(1));
        ws.add_font("B.otf", &tiny_font(2));

        let summary = BatchDriver::new(ws.settings()).run().await.unwrap();

        assert!(!summary.aborted);
        assert_eq!(ws.calls(), vec!["A-broken.otf", "B.otf"]);
        assert_eq!(ws.dist_files(), vec!["B.otf", "B.ttf"]);

        let broken = &summary.files[0];
        assert!(!broken.subset_succeeded());
        assert!(broken.ttf_path.is_none());
        assert!(broken.error.as_deref().unwrap().contains("exited"));
    }

    #[tokio::test]
    async fn test_unloadable_subset_is_reported_and_skipped() {
        let ws = Workspace::new();
        ws.add_font("Garbage.otf", b"this is not a font");
        ws.add_font("Good.ttf", &tiny_font(5));

        let summary = BatchDriver::new(ws.settings()).run().await.unwrap();

        let counts = summary.counts();
        assert_eq!(counts.subset, 2);
        assert_eq!(counts.converted, 1);
        assert_eq!(counts.failed, 1);
        assert!(!ws.dist().join("Garbage.ttf").exists());
        assert!(ws.dist().join("Good.ttf").exists());
    }

    #[tokio::test]
    async fn test_subset_without_output_is_skipped_and_counted_as_failed() {
        let ws = Workspace::new();
        ws.add_font("A-silent.otf", &tiny_font(1));
        ws.add_font("B.otf", &tiny_font(2));

        let summary = BatchDriver::new(ws.settings()).run().await.unwrap();

        assert!(!summary.aborted);
        assert_eq!(ws.calls(), vec!["A-silent.otf", "B.otf"]);
        assert_eq!(ws.dist_files(), vec!["B.otf", "B.ttf"]);

        let silent = &summary.files[0];
        assert_eq!(silent.subset_size, None);
        assert_eq!(silent.compression_ratio, None);
        assert!(silent.ttf_path.is_none());
        assert_eq!(silent.error.as_deref(), Some("subsetter produced no output"));

        let counts = summary.counts();
        assert_eq!(counts.subset, 1);
        assert_eq!(counts.failed, 1);
        assert_eq!(counts.subset + counts.failed, summary.files.len());
    }

    #[tokio::test]
    async fn test_non_utf8_font_name_is_kept_in_outputs() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let ws = Workspace::new();
        let name = OsStr::from_bytes(b"Caf\xe9.otf");
        fs::write(ws.src().join(name), tiny_font(4)).unwrap();

        let summary = BatchDriver::new(ws.settings()).run().await.unwrap();

        assert_eq!(summary.counts().converted, 1);
        assert!(ws.dist().join(name).is_file());
        assert!(ws.dist().join(OsStr::from_bytes(b"Caf\xe9.ttf")).is_file());
        assert_eq!(fs::read_dir(ws.dist()).unwrap().count(), 2);
    }

    #[tokio::test]
    async fn test_missing_subsetter_aborts_after_first_font() {
        let ws = Workspace::new();
        ws.add_font("A.otf", &tiny_font(1));
        ws.add_font("B.otf", &tiny_font(1));
        ws.add_font("C.ttf", &tiny_font(1));

        let settings = BatchSettings {
            subsetter: "fontslim-missing-subsetter".to_string(),
            ..ws.settings()
        };
        let summary = BatchDriver::new(settings).run().await.unwrap();

        assert!(summary.aborted);
        assert_eq!(summary.discovered, 3);
        assert_eq!(summary.files.len(), 1);
        assert!(ws.dist_files().is_empty());
    }

    #[tokio::test]
    async fn test_empty_content_file_still_invokes_subsetter() {
        let ws = Workspace::new();
        fs::write(ws.temp.path().join("content.txt"), "").unwrap();
        ws.add_font("Alpha.otf", &tiny_font(1));

        BatchDriver::new(ws.settings()).run().await.unwrap();

        assert_eq!(ws.calls(), vec!["Alpha.otf"]);
    }

    #[tokio::test]
    async fn test_report_written_after_batch() {
        let ws = Workspace::new();
        ws.add_font("Alpha.otf", &tiny_font(1));

        let summary = BatchDriver::new(ws.settings()).run().await.unwrap();
        let report = ws.temp.path().join("report.json");
        summary.write_json(&report).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(report).unwrap()).unwrap();
        assert_eq!(json["discovered"], 1);
        assert!(json["files"][0]["ttf_size"].is_u64());
        assert_eq!(json["aborted"], false);
    }
}
