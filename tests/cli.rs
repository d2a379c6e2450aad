use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const HEADER: &str = "Name,Platform,Year_of_Release,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales,Critic_Score,Critic_Count,User_Score,User_Count,Developer,Rating";

fn run_criticplot(dir: &Path, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_criticplot"));
    for var in [
        "CRITICPLOT_INPUT",
        "CRITICPLOT_OUTPUT",
        "CRITICPLOT_WIDTH",
        "CRITICPLOT_HEIGHT",
        "CRITICPLOT_FORMAT",
    ] {
        command.env_remove(var);
    }
    command.current_dir(dir).args(args).output().unwrap()
}

fn status_lines(stdout: &str) -> Vec<&str> {
    stdout
        .lines()
        .filter(|l| l.starts_with("made scatter plot:") || l.starts_with("Could not create plot:"))
        .collect()
}

#[test]
fn default_run_prints_report_then_writes_plot() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("video_game_sales_clean.csv"),
        format!(
            "{HEADER}\n\
             Game A,PS4,2015,Action,Pub,0.5,0.3,0.1,0.1,1.0,80,40,8.1,100,Dev,M\n\
             Game B,PS4,2016,Action,Pub,0.2,0.1,0.0,0.0,0.3,tbd,,tbd,,Dev,T\n\
             Game C,XOne,2016,Shooter,Pub,1.0,0.6,0.2,0.2,2.0,90,60,7.5,400,Dev,M\n\
             Game D,PC,2014,Strategy,Pub,0.2,0.2,0.0,0.1,0.5,70,25,6.0,80,Dev,T\n"
        ),
    )
    .unwrap();

    let output = run_criticplot(dir.path(), &[]);
    assert!(output.status.success(), "exit status {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "linear correlation in critic score vs global sales: 0.982");
    assert_eq!(lines[1], "mean critic score: 80.00, stdev: 8.16");
    assert_eq!(lines[2], "mean global sales: 1.17, stdev: 0.62");
    assert_eq!(status_lines(&stdout), vec!["made scatter plot: critic_vs_global.png"]);

    let png = fs::read(dir.path().join("critic_vs_global.png")).unwrap();
    assert!(png.starts_with(b"\x89PNG"));
}

#[test]
fn empty_sample_keeps_report_and_reports_plot_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("games.csv"),
        format!("{HEADER}\nGame A,PS4,2015,Action,Pub,0.5,0.3,0.1,0.1,,tbd,,,,Dev,M\n"),
    )
    .unwrap();

    let output = run_criticplot(dir.path(), &["--input", "games.csv", "--output", "plot.png"]);
    assert!(output.status.success(), "exit status {:?}", output.status);

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("linear correlation in critic score vs global sales: 0.000\n"));
    assert!(stdout.contains("mean global sales: 0.00, stdev: 0.00\n"));
    assert_eq!(
        status_lines(&stdout),
        vec!["Could not create plot: no numeric data to plot"]
    );
    assert!(!dir.path().join("plot.png").exists());
}

#[test]
fn json_format_keeps_stdout_a_single_document() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("games.csv"),
        "Name,Global_Sales,Critic_Score\nHalo 3,12.12,94\nTetris,30.26,\n",
    )
    .unwrap();

    let output = run_criticplot(dir.path(), &["-i", "games.csv", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["n"], 1);
    assert_eq!(value["r"], 0.0);
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("made scatter plot: critic_vs_global.png"));
}

#[test]
fn unreadable_input_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_criticplot(dir.path(), &["--input", "missing.csv"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.csv"));
}
