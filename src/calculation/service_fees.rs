//! Service fee resolution.
//!
//! Additional services are flat fees with their own tax rates. A fee is
//! applied to every shift (`per_shift`) or only when one of its keywords is
//! mentioned in the shift report (`on_mention`). Gross totals are summed
//! per service, never converted from the net total, since each service may
//! carry a distinct tax rate.

use std::collections::HashSet;

use crate::config::{ApplicationRule, ServiceConfig};
use crate::error::EngineResult;
use crate::models::AppliedServiceFee;

use super::tax::to_gross;

/// The result of service fee resolution for one shift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFeeResult {
    /// Net sum of applied fees.
    pub fees_net: i64,
    /// Gross sum of applied fees, each converted at its own tax rate.
    pub fees_gross: i64,
    /// The applied fees, in configuration order.
    pub applied: Vec<AppliedServiceFee>,
}

/// Resolves which service fees apply to a shift and sums them.
///
/// `mentioned_keywords` must already be lowercased (see
/// `ShiftInput::normalized_keywords`).
///
/// # Errors
///
/// Returns an error if a service's tax percentage is out of range; a
/// validated [`crate::config::ProjectConfig`] never triggers this.
pub fn resolve_service_fees(
    services: &[ServiceConfig],
    mentioned_keywords: &HashSet<String>,
) -> EngineResult<ServiceFeeResult> {
    let mut fees_net = 0i64;
    let mut fees_gross = 0i64;
    let mut applied = Vec::new();

    for service in services {
        let applies = match service.application_rule {
            ApplicationRule::PerShift => true,
            ApplicationRule::OnMention => service
                .keyword_set()
                .iter()
                .any(|keyword| mentioned_keywords.contains(keyword)),
        };
        if !applies {
            continue;
        }

        let cost_gross = to_gross(service.cost_net, service.tax_percentage)?;
        fees_net += service.cost_net;
        fees_gross += cost_gross;

        applied.push(AppliedServiceFee {
            name: service.name.clone(),
            cost_net: service.cost_net,
            cost_gross,
            tax_percentage: service.tax_percentage,
        });
    }

    Ok(ServiceFeeResult {
        fees_net,
        fees_gross,
        applied,
    })
}
