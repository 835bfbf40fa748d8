//! Status delta effect.

use crate::action::technique::{EffectTarget, StatusAmount};
use crate::env::RandomSource;
use crate::event::ActionEvent;
use crate::ledger::{self, StatusError};
use crate::state::StatusInstance;

use super::EffectContext;

/// Install, shorten or remove a status on the chosen side.
///
/// - `Turns(n)`, `n > 0`: install `instance`, replacing any status of the
///   same kind, and emit `StatusApplied`. The duration is
///   `instance.remaining_turns`, whatever `n` is.
/// - `Turns(n)`, `n < 0`: consume `|n|` turns from the held status.
/// - `All`: consume the held status entirely.
///
/// Consuming a kind the side does not hold does nothing. An authored `chance`
/// costs one draw and gates the whole effect; the effect lands when the draw
/// is below the chance.
pub(super) fn apply<R: RandomSource + ?Sized>(
    ctx: &mut EffectContext<'_, R>,
    instance: &StatusInstance,
    target: EffectTarget,
    amount: StatusAmount,
    chance: Option<f64>,
) -> Result<(), StatusError> {
    let kind = instance.kind();

    if let Some(chance) = chance {
        let draw = ctx.rng.next_unit();
        if draw >= chance {
            tracing::debug!(
                "{} resisted {} ({} >= {})",
                ctx.side(target).name,
                kind,
                draw,
                chance
            );
            return Ok(());
        }
    }

    let caster = ctx.actor.name.clone();
    let (side, events) = ctx.split(target);

    let consume = match amount {
        StatusAmount::Turns(0) => return Ok(()),
        StatusAmount::Turns(turns) if turns > 0 => {
            if let Some(previous) = side.statuses.insert(instance.clone()) {
                tracing::debug!(
                    "{}: {} replaced ({} turns left)",
                    side.name,
                    kind,
                    previous.remaining_turns
                );
            }
            events.push(ActionEvent::StatusApplied {
                actor: caster,
                target: side.name.clone(),
                status: instance.clone(),
            });
            return Ok(());
        }
        StatusAmount::Turns(turns) => side.status(kind).map(|_| turns.saturating_neg()),
        StatusAmount::All => side.status(kind).map(|s| s.remaining_turns),
    };

    match consume {
        Some(delta) => ledger::consume_in_place(side, kind, delta, events),
        None => {
            tracing::warn!("{} holds no {} to consume", side.name, kind);
            Ok(())
        }
    }
}
