//! Running challenges against the console.

use keyhunter_rules::{
    Challenge, CombatOutcome, Drill, DrillKind, DrillProgress, HazardOutcome, LocationGraph,
};
use tracing::{debug, info};

use super::{enter, life_loss, Next, Session};
use crate::console::Console;
use crate::error::EngineError;
use crate::events::Event;
use crate::narration;

pub(super) fn resolve(
    graph: &LocationGraph,
    session: &mut Session,
    challenge: &Challenge,
    console: &mut impl Console,
) -> Result<Next, EngineError> {
    match challenge {
        Challenge::Drill { kind, then } => {
            drill(*kind, console)?;
            enter(graph, session, *then, console)?;
            Ok(Next::Stay)
        }
        Challenge::Combat(combat) => {
            let question = narration::combat_question(combat);
            let choice = console.choose(&question, &combat.choices())?;
            match combat.resolve(choice, &session.inventory)? {
                CombatOutcome::Victory(next) => {
                    info!(foe = ?combat.foe, "foe defeated");
                    console.show(&Event::CombatWon(combat.foe))?;
                    enter(graph, session, next, console)?;
                    Ok(Next::Stay)
                }
                CombatOutcome::Defeat => {
                    info!(foe = ?combat.foe, choice, "fight lost");
                    console.show(&Event::CombatLost(combat.foe))?;
                    life_loss(session, console)
                }
            }
        }
        Challenge::Hazard(hazard) => {
            let question = narration::hazard_question(hazard);
            let choice = console.choose(&question, &hazard.choices())?;
            match hazard.resolve(choice)? {
                HazardOutcome::Injured => {
                    console.show(&Event::HazardTaken(hazard.kind))?;
                    life_loss(session, console)
                }
                HazardOutcome::Avoided(next) => {
                    console.show(&Event::HazardAvoided(hazard.kind))?;
                    enter(graph, session, next, console)?;
                    Ok(Next::Stay)
                }
            }
        }
    }
}

/// Prompt until the token has been confirmed enough times. Wrong input is re-prompted, never fatal.
fn drill(kind: DrillKind, console: &mut impl Console) -> Result<(), EngineError> {
    let mut drill = Drill::new(kind);
    let mut retry = false;

    while !drill.is_complete() {
        let input = console.read_line(narration::drill_prompt(kind, retry))?;
        match drill.submit(&input) {
            DrillProgress::Rejected => {
                debug!(?kind, "drill input rejected");
                retry = true;
            }
            DrillProgress::Confirmed { remaining } => {
                retry = false;
                console.show(&Event::DrillStroke { kind, remaining })?;
            }
            DrillProgress::Completed => {
                console.show(&Event::DrillStroke { kind, remaining: 0 })?;
            }
        }
    }

    console.show(&Event::DrillCompleted(kind))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_drill_counts_down() {
        let mut console = ScriptedConsole::new(["p", "x", "p", "p", "p", "p"]);
        drill(DrillKind::WebEscape, &mut console).unwrap();

        let strokes: Vec<_> = console
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::DrillStroke { remaining, .. } => Some(*remaining),
                _ => None,
            })
            .collect();
        assert_eq!(strokes, vec![4, 3, 2, 1, 0]);
        assert_eq!(
            console.events().last(),
            Some(&Event::DrillCompleted(DrillKind::WebEscape))
        );
    }

    #[test]
    fn test_drill_stops_when_input_closes() {
        let mut console = ScriptedConsole::new(["dig", "dig"]);
        let err = drill(DrillKind::Dig, &mut console).unwrap_err();
        assert!(err.is_input_closed());
    }
}
