// src/models/admin.rs

use serde::Serialize;

use crate::{
    models::enums::{ApprovalDecision, ModerationAction},
    validation::{FieldErrors, ParseOptions, RawInput, Schema, primitives::char_len},
};

/// Admin decision on a pending item.
///
/// A rejection must carry a reason. A reason sent with an approval is
/// accepted and dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalAction {
    pub action: ApprovalDecision,
    pub rejection_reason: Option<String>,
}

/// Approving or rejecting a campsite listing.
pub type CampsiteApprovalAction = ApprovalAction;
/// Approving or rejecting a request to become a campsite owner.
pub type OwnerRequestAction = ApprovalAction;

impl Schema for ApprovalAction {
    fn parse(mut input: RawInput, _options: &ParseOptions) -> Result<Self, FieldErrors> {
        let action: ApprovalDecision = input.required_choice("action");
        let rejection_reason = if needs_reason(&input, action == ApprovalDecision::Reject) {
            input.string("rejection_reason")
        } else {
            input.discard("rejection_reason");
            None
        };

        let mut errors = input.finish();
        if !errors.is_empty() {
            return Err(errors);
        }

        let rejection_reason = match action {
            ApprovalDecision::Reject => {
                check_reason(
                    rejection_reason.as_deref(),
                    "rejection_reason",
                    "Rejection reason",
                    (10, 500),
                    &mut errors,
                );
                rejection_reason
            }
            ApprovalDecision::Approve => None,
        };

        errors.into_result(ApprovalAction {
            action,
            rejection_reason,
        })
    }
}

/// Admin action on a reported or visible review. Hiding requires a reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewModerationAction {
    pub action: ModerationAction,
    pub hide_reason: Option<String>,
}

impl Schema for ReviewModerationAction {
    fn parse(mut input: RawInput, _options: &ParseOptions) -> Result<Self, FieldErrors> {
        let action: ModerationAction = input.required_choice("action");
        let hide_reason = if needs_reason(&input, action == ModerationAction::Hide) {
            input.string("hide_reason")
        } else {
            input.discard("hide_reason");
            None
        };

        let mut errors = input.finish();
        if !errors.is_empty() {
            return Err(errors);
        }

        let hide_reason = match action {
            ModerationAction::Hide => {
                check_reason(
                    hide_reason.as_deref(),
                    "hide_reason",
                    "Hide reason",
                    (5, 500),
                    &mut errors,
                );
                hide_reason
            }
            ModerationAction::Unhide | ModerationAction::Delete | ModerationAction::Dismiss => None,
        };

        errors.into_result(ReviewModerationAction {
            action,
            hide_reason,
        })
    }
}

/// A reason is read only for the action that takes one. With an unreadable
/// action it is still read, so its own errors are reported too.
fn needs_reason(input: &RawInput, takes_reason: bool) -> bool {
    takes_reason || input.errors().has("action")
}

/// Conditional requirement: the reason must be present, non-blank and
/// within bounds. Errors land on the reason, never on the action.
fn check_reason(
    reason: Option<&str>,
    path: &str,
    label: &str,
    (min, max): (usize, usize),
    errors: &mut FieldErrors,
) {
    match reason {
        Some(reason) if !reason.trim().is_empty() => {
            let len = char_len(reason);
            if len < min || len > max {
                errors.push(
                    path,
                    format!("{label} must be between {min} and {max} characters"),
                );
            }
        }
        _ => errors.push(path, format!("{label} is required")),
    }
}
