//! Tests for argument parsing and the batch map runner

#[cfg(test)]
mod tests {
    use cavewright::io::cli::{
        CellularArgs, Cli, GeneratorCommand, MapRunner, parse_range, parse_topology,
    };
    use cavewright::spatial::topology::Topology;
    use clap::Parser;
    use std::path::Path;

    fn quiet_cli(generator: GeneratorCommand, output: &Path) -> Cli {
        Cli {
            generator,
            width: 24,
            height: 12,
            seed: 3,
            count: 2,
            output: output.to_path_buf(),
            png: false,
            no_text: false,
            visualize: false,
            quiet: true,
        }
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("3-9"), Ok([3, 9]));
        assert_eq!(parse_range(" 4 - 6 "), Ok([4, 6]));
        assert_eq!(parse_range("5"), Ok([5, 5]));
        assert!(parse_range("a-3").is_err());
    }

    #[test]
    fn test_parse_topology() {
        assert_eq!(parse_topology("6"), Ok(Topology::Six));
        assert!(parse_topology("5").is_err());
        assert!(parse_topology("hex").is_err());
    }

    // Tests global options may follow the subcommand and defaults apply
    #[test]
    fn test_parse_subcommand_with_globals() {
        let cli = Cli::try_parse_from([
            "cavewright",
            "digger",
            "--room-width",
            "4-6",
            "--dug",
            "0.4",
            "--seed",
            "9",
            "--quiet",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.seed, 9);
        assert!(cli.quiet);
        assert!(!cli.should_show_progress());
        let GeneratorCommand::Digger(args) = &cli.generator else {
            unreachable!("digger subcommand was given");
        };
        let options = args.options();
        assert_eq!(options.room_width, [4, 6]);
        assert_eq!(options.room_height, [3, 5]);
        assert!((options.dug_percentage - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_cellular_lists() {
        let cli = Cli::try_parse_from([
            "cavewright",
            "cellular",
            "--born",
            "3",
            "--survive",
            "2,3",
            "--topology",
            "4",
        ])
        .expect("arguments should parse");

        let GeneratorCommand::Cellular(args) = &cli.generator else {
            unreachable!("cellular subcommand was given");
        };
        assert_eq!(args.born, vec![3]);
        assert_eq!(args.survive, vec![2, 3]);
        assert_eq!(args.options().topology, Topology::Four);
        assert_eq!(cli.generator.name(), "cellular");
    }

    #[test]
    fn test_rejects_missing_subcommand() {
        assert!(Cli::try_parse_from(["cavewright", "--seed", "1"]).is_err());
    }

    // Tests one text file per map, named by generator and seed
    #[test]
    fn test_runner_writes_text_per_seed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut runner = MapRunner::new(quiet_cli(GeneratorCommand::Arena, dir.path()));

        let written = runner.run().expect("arena run should succeed");

        assert_eq!(
            written,
            vec![dir.path().join("arena_3.txt"), dir.path().join("arena_4.txt")]
        );
        let text = std::fs::read_to_string(dir.path().join("arena_3.txt")).expect("read map");
        assert_eq!(text.lines().count(), 12);
        assert_eq!(text.lines().next(), Some("#".repeat(24).as_str()));
    }

    #[test]
    fn test_runner_cellular_exports() {
        let dir = tempfile::tempdir().expect("temp dir");
        let args = CellularArgs {
            born: vec![5, 6, 7, 8],
            survive: vec![4, 5, 6, 7, 8],
            topology: Topology::Eight,
            probability: 0.45,
            generations: 3,
            no_connect: false,
        };
        let mut cli = quiet_cli(GeneratorCommand::Cellular(args), dir.path());
        cli.count = 1;
        cli.no_text = true;
        cli.png = true;
        cli.visualize = true;

        let written = MapRunner::new(cli).run().expect("cellular run should succeed");

        assert_eq!(
            written,
            vec![
                dir.path().join("cellular_3.png"),
                dir.path().join("cellular_3.gif")
            ]
        );
        assert!(written.iter().all(|path| path.exists()));
    }

    #[test]
    fn test_runner_rejects_invalid_options() {
        let dir = tempfile::tempdir().expect("temp dir");
        let parsed = Cli::try_parse_from(["cavewright", "digger", "--room-width", "9-3", "-q"])
            .expect("arguments should parse");
        let mut bad = quiet_cli(parsed.generator, dir.path());
        bad.count = 1;

        assert!(MapRunner::new(bad).run().is_err());
    }
}
