use crate::config::defaults::WheelDefaults;
use crate::core::prompt::{match_choice, parse_with_default, yes_or_no_prompt, NumericInput, YesNo};
use crate::domain::model::{SideGeometry, WheelGeometry};
use crate::domain::ports::DefaultsProvider;
use crate::utils::error::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};

pub const FAREWELL: &str = "Thank you and goodbye!";

const RESTART_PROMPT: &str = "[Enter] to start all over, [q] or [ctrl-C] to exit...";
const QUIT_OPTIONS: [(&str, ()); 2] = [("q", ()), ("quit", ())];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds in which every input was collected.
    pub rounds: usize,
    /// Rounds whose geometry the calculator rejected.
    pub failed_rounds: usize,
}

/// Prompt/compute/print loop over any line source.
///
/// The loop ends when the input is exhausted or the user answers the
/// restart prompt with `q`. Interrupt handling belongs to the caller.
pub struct InteractiveSession<R, W, C> {
    input: R,
    output: W,
    config: C,
}

impl<R: BufRead, W: Write, C: DefaultsProvider> InteractiveSession<R, W, C> {
    pub fn new(input: R, output: W, config: C) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        while let Some(geometry) = self.collect_geometry()? {
            summary.rounds += 1;
            if !self.report(&geometry)? {
                summary.failed_rounds += 1;
            }

            match self.ask(RESTART_PROMPT)? {
                None => break,
                Some(answer) if match_choice(&answer, &QUIT_OPTIONS).is_some() => break,
                Some(_) => tracing::debug!("Starting round {}", summary.rounds + 1),
            }
        }

        writeln!(self.output, "\n{}", FAREWELL)?;
        self.output.flush()?;
        tracing::info!(
            rounds = summary.rounds,
            failed = summary.failed_rounds,
            "Session finished"
        );
        Ok(summary)
    }

    /// Asks every question of one round; `None` once the input runs out.
    pub fn collect_geometry(&mut self) -> Result<Option<WheelGeometry>> {
        let d: WheelDefaults = self.config.defaults().clone();

        let Some(left_hub_diameter) = self.ask_number(
            &format!(
                "Left hub flange pitch circle diameter [mm]? (default: {}mm) : ",
                d.left_hub_diameter
            ),
            "left_hub_diameter",
            d.left_hub_diameter,
        )?
        else {
            return Ok(None);
        };

        let Some(right_hub_diameter) = self.ask_number(
            &format!(
                "Right hub flange pitch circle diameter [mm]? (default: {}) : ",
                same_as_left_or(d.right_hub_diameter.map(|v| format!("{}mm", v)), "the same as left")
            ),
            "right_hub_diameter",
            d.right_hub_diameter.unwrap_or(left_hub_diameter),
        )?
        else {
            return Ok(None);
        };

        let Some(rim_diameter) = self.ask_number(
            &format!("Effective rim diameter [mm]? (default: {}) : ", d.rim_diameter),
            "rim_diameter",
            d.rim_diameter,
        )?
        else {
            return Ok(None);
        };

        let Some((spokes_left, spokes_right)) = self.ask_spoke_counts(&d)? else {
            return Ok(None);
        };

        let Some(left_dist) = self.ask_number(
            &format!(
                "Left side hub flange-to-center distance [mm]? (default: {}) : ",
                d.left_dist
            ),
            "left_dist",
            d.left_dist,
        )?
        else {
            return Ok(None);
        };

        let Some(right_dist) = self.ask_number(
            &format!(
                "Right side hub flange-to-center distance [mm]? (default: {}) : ",
                same_as_left_or(d.right_dist, "the same as left")
            ),
            "right_dist",
            d.right_dist.unwrap_or(left_dist),
        )?
        else {
            return Ok(None);
        };

        let Some(hole_diameter) = self.ask_number(
            &format!("Hub hole diameter [mm]? (default: {}) : ", d.hole_diameter),
            "hole_diameter",
            d.hole_diameter,
        )?
        else {
            return Ok(None);
        };

        let Some(crosses_left) = self.ask_number(
            &format!("Crosses on the left side? (default: {}) : ", d.crosses_left),
            "crosses_left",
            d.crosses_left,
        )?
        else {
            return Ok(None);
        };

        let Some(crosses_right) = self.ask_number(
            &format!(
                "Crosses on the right side? (default: {}) : ",
                same_as_left_or(d.crosses_right, "same as the left")
            ),
            "crosses_right",
            d.crosses_right.unwrap_or(crosses_left),
        )?
        else {
            return Ok(None);
        };

        Ok(Some(WheelGeometry {
            left: SideGeometry {
                hub_diameter: left_hub_diameter,
                spokes: spokes_left,
                crosses: crosses_left,
                flange_distance: left_dist,
            },
            right: SideGeometry {
                hub_diameter: right_hub_diameter,
                spokes: spokes_right,
                crosses: crosses_right,
                flange_distance: right_dist,
            },
            rim_diameter,
            hole_diameter,
        }))
    }

    /// Prints both lengths, or the reason there are none. Returns whether it succeeded.
    fn report(&mut self, geometry: &WheelGeometry) -> Result<bool> {
        writeln!(self.output, "We now have all data, calculating the length...")?;

        match geometry.spoke_lengths() {
            Ok(lengths) => {
                writeln!(self.output, "Left spokes length: {}", lengths.left)?;
                writeln!(self.output, "Right spokes length: {}", lengths.right)?;
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(
                    "Calculation failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                writeln!(self.output, "❌ {}", e.user_friendly_message())?;
                writeln!(self.output, "💡 {}", e.recovery_suggestion())?;
                Ok(false)
            }
        }
    }

    fn ask_spoke_counts(&mut self, d: &WheelDefaults) -> Result<Option<(u32, u32)>> {
        let question =
            yes_or_no_prompt("Does the wheel have the same number of spokes on both sides?");
        let same = loop {
            let Some(answer) = self.ask(&question)? else {
                return Ok(None);
            };
            if let Some(choice) = match_choice(&answer, &YesNo::OPTIONS) {
                break choice;
            }
        };

        if same.is_yes() {
            loop {
                let Some(total) = self.ask_number(
                    &format!("How many spokes? (default: {}) : ", d.total_spokes),
                    "total_spokes",
                    d.total_spokes,
                )?
                else {
                    return Ok(None);
                };
                if total % 2 == 0 {
                    return Ok(Some((total / 2, total / 2)));
                }
                writeln!(
                    self.output,
                    "{} spokes cannot be split evenly between both sides.",
                    total
                )?;
            }
        }

        let Some(left) = self.ask_number(
            &format!(
                "How many spokes on the left side? (default: {}) : ",
                d.spokes_per_side
            ),
            "spokes_left",
            d.spokes_per_side,
        )?
        else {
            return Ok(None);
        };
        let Some(right) = self.ask_number(
            &format!(
                "How many spokes on the right side? (default: {}) : ",
                d.spokes_per_side
            ),
            "spokes_right",
            d.spokes_per_side,
        )?
        else {
            return Ok(None);
        };
        Ok(Some((left, right)))
    }

    fn ask_number<T: NumericInput>(
        &mut self,
        prompt: &str,
        field: &str,
        default: T,
    ) -> Result<Option<T>> {
        Ok(self
            .ask(prompt)?
            .map(|answer| parse_with_default(field, &answer, default)))
    }

    /// Shows the prompt and reads one line without its line ending; `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn same_as_left_or<T: Display>(value: Option<T>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |v| v.to_string())
}
