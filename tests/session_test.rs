use spokecalc::config::toml_config::TomlConfig;
use spokecalc::core::DefaultsProvider;
use spokecalc::{compute, InteractiveSession, SessionSummary, WheelDefaults};

fn run_with<C: DefaultsProvider>(input: &str, config: C) -> (SessionSummary, String) {
    let mut output = Vec::new();
    let summary = InteractiveSession::new(input.as_bytes(), &mut output, config)
        .run()
        .unwrap();
    (summary, String::from_utf8(output).unwrap())
}

fn run(input: &str) -> (SessionSummary, String) {
    run_with(input, WheelDefaults::default())
}

#[test]
fn test_all_defaults_then_quit() {
    // 3 geometry answers, "same spokes" = y, 6 more blanks, then quit
    let input = "\n\n\ny\n\n\n\n\n\n\nq\n";
    let (summary, output) = run(input);

    assert_eq!(
        summary,
        SessionSummary {
            rounds: 1,
            failed_rounds: 0
        }
    );
    assert!(output.contains("How many spokes? (default: 36) : "));
    assert!(output.contains("We now have all data, calculating the length..."));
    assert!(output.contains("Left spokes length: 290.310761844"));
    assert!(output.contains("Right spokes length: 290.310761844"));
    assert!(output.contains("[Enter] to start all over, [q] or [ctrl-C] to exit..."));
    assert!(output.trim_end().ends_with("Thank you and goodbye!"));
}

#[test]
fn test_prompts_follow_documented_order() {
    let input = "\n\n\nn\n\n\n\n\n\n\n\nQUIT\n";
    let (_, output) = run(input);

    let prompts = [
        "Left hub flange pitch circle diameter [mm]? (default: 58mm) : ",
        "Right hub flange pitch circle diameter [mm]? (default: the same as left) : ",
        "Effective rim diameter [mm]? (default: 608) : ",
        "Does the wheel have the same number of spokes on both sides? [Y / N]: ",
        "How many spokes on the left side? (default: 18) : ",
        "How many spokes on the right side? (default: 18) : ",
        "Left side hub flange-to-center distance [mm]? (default: 25) : ",
        "Right side hub flange-to-center distance [mm]? (default: the same as left) : ",
        "Hub hole diameter [mm]? (default: 2.7) : ",
        "Crosses on the left side? (default: 3) : ",
        "Crosses on the right side? (default: same as the left) : ",
    ];

    let mut cursor = 0;
    for prompt in prompts {
        let found = output[cursor..]
            .find(prompt)
            .unwrap_or_else(|| panic!("prompt missing or out of order: {prompt}"));
        cursor += found + prompt.len();
    }
}

#[test]
fn test_typed_values_reach_the_calculator() {
    let input = "45\n52\n622\nN\n16\n14\n20\n35\n2.6\n3\n2\nq\n";
    let (summary, output) = run(input);

    let expected = compute(45.0, 52.0, 622.0, 2.6, 16, 14, 3, 2, 20.0, 35.0).unwrap();
    assert_eq!(summary.rounds, 1);
    assert!(output.contains(&format!("Left spokes length: {}", expected.left)));
    assert!(output.contains(&format!("Right spokes length: {}", expected.right)));
}

#[test]
fn test_right_side_defaults_follow_left_answers() {
    let input = "60\n\n\ny\n32\n30\n\n\n1\n\nq\n";
    let (_, output) = run(input);

    let expected = compute(60.0, 60.0, 608.0, 2.7, 16, 16, 1, 1, 30.0, 30.0).unwrap();
    assert_eq!(expected.left, expected.right);
    assert!(output.contains(&format!("Right spokes length: {}", expected.right)));
}

#[test]
fn test_unparseable_answer_falls_back_to_default() {
    let input = "abc\n\n\ny\nlots\n\n\n\n\n\nq\n";
    let (_, output) = run(input);
    assert!(output.contains("Left spokes length: 290.310761844"));
}

#[test]
fn test_odd_total_is_asked_again() {
    let input = "\n\n\ny\n35\n36\n\n\n\n\n\nq\n";
    let (summary, output) = run(input);

    assert!(output.contains("35 spokes cannot be split evenly between both sides."));
    assert_eq!(output.matches("How many spokes? (default: 36) : ").count(), 2);
    assert_eq!(summary.failed_rounds, 0);
}

#[test]
fn test_zero_spokes_reported_and_session_continues() {
    // round 1 has no left spokes, round 2 uses defaults
    let input = "\n\n\nn\n0\n\n\n\n\n\n\n\n\n\n\ny\n\n\n\n\n\n\nq\n";
    let (summary, output) = run(input);

    assert_eq!(
        summary,
        SessionSummary {
            rounds: 2,
            failed_rounds: 1
        }
    );
    assert!(output.contains("The left side has no spokes, so no length can be computed."));
    assert!(output.contains("Left spokes length: 290.310761844"));
}

#[test]
fn test_end_of_input_mid_round_ends_session() {
    let (summary, output) = run("58\n58\n");
    assert_eq!(summary.rounds, 0);
    assert!(output.contains("Effective rim diameter"));
    assert!(output.trim_end().ends_with("Thank you and goodbye!"));
}

#[test]
fn test_enter_starts_a_new_round() {
    let one_round = "\n\n\ny\n\n\n\n\n\n\n";
    let input = format!("{one_round}\n{one_round}q\n");
    let (summary, output) = run(&input);

    assert_eq!(summary.rounds, 2);
    assert_eq!(output.matches("Left spokes length: ").count(), 2);
}

#[test]
fn test_defaults_from_toml_config() {
    let config = TomlConfig::from_toml_str(
        r#"
[defaults]
left_hub_diameter = 45.0
right_hub_diameter = 52.0
total_spokes = 32
crosses_right = 2
"#,
    )
    .unwrap();

    let input = "\n\n\ny\n\n\n\n\n\n\nq\n";
    let (_, output) = run_with(input, config);

    assert!(output.contains("Left hub flange pitch circle diameter [mm]? (default: 45mm) : "));
    assert!(output.contains("Right hub flange pitch circle diameter [mm]? (default: 52mm) : "));
    assert!(output.contains("How many spokes? (default: 32) : "));
    assert!(output.contains("Crosses on the right side? (default: 2) : "));

    let expected = compute(45.0, 52.0, 608.0, 2.7, 16, 16, 3, 2, 25.0, 25.0).unwrap();
    assert!(output.contains(&format!("Left spokes length: {}", expected.left)));
    assert!(output.contains(&format!("Right spokes length: {}", expected.right)));
}
