//! Tests for command-line parsing and grid generation runs

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use tempfile::TempDir;
    use wavetile::algorithm::executor::SolveStatus;
    use wavetile::io::cli::{Cli, Runner};
    use wavetile::io::configuration::{
        DEFAULT_HEIGHT, DEFAULT_MAX_BACKTRACKS, DEFAULT_MAX_STEPS, DEFAULT_WIDTH,
    };
    use wavetile::io::error::{AlgorithmError, ErrorKind};
    use wavetile::io::prefill::CellPin;
    use wavetile::io::tileset::load_tileset;

    const CHECKER: &str = include_str!("../../../data/tilesets/checker.json");

    const DEAD_END: &str = r#"[
        { "name": "left", "weight": 1 },
        { "name": "right", "weight": 1 }
    ]"#;

    fn write_tileset(dir: &TempDir, source: &str) -> PathBuf {
        let path = dir.path().join("tiles.json");
        fs::write(&path, source).unwrap();
        path
    }

    fn quiet_cli(path: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["wavetile", path.to_str().unwrap(), "--quiet"];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    // Tests CLI parsing with only the required tileset argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["wavetile", "tiles.json"]);

        assert_eq!(cli.tileset, PathBuf::from("tiles.json"));
        assert_eq!(cli.width, DEFAULT_WIDTH);
        assert_eq!(cli.height, DEFAULT_HEIGHT);
        assert_eq!(cli.steps, DEFAULT_MAX_STEPS);
        assert_eq!(cli.backtracks, DEFAULT_MAX_BACKTRACKS);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.count, 1);
        assert!(cli.pins.is_empty());
        assert!(!cli.quiet);
        assert!(!cli.show_tileset);
    }

    // Tests CLI parsing with every argument, pins included
    // Verified by dropping the pin value parser
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "wavetile",
            "tiles.json",
            "-W",
            "20",
            "-H",
            "10",
            "--seed",
            "123",
            "--steps",
            "500",
            "-b",
            "3",
            "--pin",
            "1,2,sea",
            "-p",
            "0,0,land",
            "--count",
            "4",
            "--quiet",
            "--show-tileset",
        ]);

        assert_eq!((cli.width, cli.height), (20, 10));
        assert_eq!(cli.seed, Some(123));
        assert_eq!(cli.steps, 500);
        assert_eq!(cli.backtracks, 3);
        assert_eq!(cli.count, 4);
        assert!(cli.quiet);
        assert!(cli.show_tileset);
        assert_eq!(
            cli.pins,
            vec![
                CellPin {
                    x: 1,
                    y: 2,
                    tile: "sea".to_string()
                },
                CellPin {
                    x: 0,
                    y: 0,
                    tile: "land".to_string()
                },
            ]
        );
    }

    // Tests malformed pins are rejected at parse time
    // Verified by accepting pins without a tile name
    #[test]
    fn test_cli_rejects_bad_pin() {
        assert!(Cli::try_parse_from(["wavetile", "tiles.json", "--pin", "1,2"]).is_err());
    }

    // Tests progress display based on --quiet flag
    // Verified by inverting quiet flag logic
    #[test]
    fn test_should_show_progress() {
        assert!(Cli::parse_from(["wavetile", "tiles.json"]).should_show_progress());
        assert!(!Cli::parse_from(["wavetile", "tiles.json", "-q"]).should_show_progress());
    }

    // Tests batch runs use consecutive seeds
    // Verified by reusing the base seed for every run
    #[test]
    fn test_seed_for_run() {
        let seeded = Cli::parse_from(["wavetile", "tiles.json", "-s", "10"]);
        assert_eq!(seeded.seed_for(0), Some(10));
        assert_eq!(seeded.seed_for(3), Some(13));

        let unseeded = Cli::parse_from(["wavetile", "tiles.json"]);
        assert_eq!(unseeded.seed_for(2), None);
    }

    // Tests a single run solves and honours pins
    // Verified by applying pins after solving
    #[test]
    fn test_run_applies_pins() {
        let dir = TempDir::new().unwrap();
        let path = write_tileset(&dir, CHECKER);
        let tileset = Arc::new(load_tileset(&path).unwrap());
        let mut runner = Runner::new(quiet_cli(&path, &["-W", "4", "-H", "3", "-p", "0,0,white"]));

        let result = runner.run(0, tileset).unwrap();

        assert_eq!(result.solver.status(), SolveStatus::Collapsed);
        assert_eq!(result.solver.tile_at(0, 0), Some(1));
        assert_eq!(result.solver.tile_at(1, 0), Some(0));
        assert_eq!(result.seed, None);
    }

    // Tests a full batch succeeds for a solvable tileset
    // Verified by returning an error when any run needs more than one step
    #[test]
    fn test_process_batch() {
        let dir = TempDir::new().unwrap();
        let path = write_tileset(&dir, CHECKER);
        let mut runner = Runner::new(quiet_cli(&path, &["-s", "5", "-c", "3"]));

        assert!(runner.process().is_ok());
    }

    // Tests an unsolvable run is reported as an error
    // Verified by ignoring failed solver status after the batch
    #[test]
    fn test_process_reports_unsolvable() {
        let dir = TempDir::new().unwrap();
        let path = write_tileset(&dir, DEAD_END);
        let mut runner = Runner::new(quiet_cli(&path, &["-W", "2", "-H", "1", "-b", "2"]));

        let error = runner.process().unwrap_err();
        assert!(matches!(error, AlgorithmError::Unsolvable { .. }));
        assert_eq!(error.kind(), ErrorKind::Unsolvable);
    }

    // Tests load failures and a zero count are errors
    // Verified by removing error return for nonexistent files
    #[test]
    fn test_process_rejects_bad_input() {
        let dir = TempDir::new().unwrap();

        let missing = dir.path().join("missing.json");
        let error = Runner::new(quiet_cli(&missing, &[])).process().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Load);

        let path = write_tileset(&dir, CHECKER);
        let error = Runner::new(quiet_cli(&path, &["-c", "0"])).process().unwrap_err();
        assert!(matches!(error, AlgorithmError::InvalidParameter { parameter: "count", .. }));
    }

    // Tests an invalid pin aborts the run
    // Verified by skipping pins that name unknown tiles
    #[test]
    fn test_process_rejects_unknown_pin() {
        let dir = TempDir::new().unwrap();
        let path = write_tileset(&dir, CHECKER);
        let mut runner = Runner::new(quiet_cli(&path, &["-p", "0,0,grey"]));

        let error = runner.process().unwrap_err();
        assert!(matches!(error, AlgorithmError::UnknownTileName { .. }));
    }
}
