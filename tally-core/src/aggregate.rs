use crate::catalog::Catalog;
use crate::domain::{LineItem, TotalsSummary};
use crate::order::OrderQuantities;
use crate::policy::ServiceChargePolicy;

/// Totals with the default 10% half-up service charge.
pub fn compute(
    catalog: &Catalog,
    order: &OrderQuantities,
    service_charge_enabled: bool,
) -> TotalsSummary {
    compute_with_policy(
        catalog,
        order,
        service_charge_enabled,
        &ServiceChargePolicy::default(),
    )
}

/// Recompute totals from scratch. Lines follow catalog order; ids the
/// catalog does not know are ignored.
pub fn compute_with_policy(
    catalog: &Catalog,
    order: &OrderQuantities,
    service_charge_enabled: bool,
    policy: &ServiceChargePolicy,
) -> TotalsSummary {
    let mut line_items = Vec::new();
    let mut subtotal = 0u64;
    let mut total_item_count = 0u64;

    for item in catalog.iter() {
        let quantity = order.get(&item.id);
        if quantity == 0 {
            continue;
        }
        let line_total = (quantity as u64).saturating_mul(item.unit_price);
        subtotal = subtotal.saturating_add(line_total);
        total_item_count += quantity as u64;
        line_items.push(LineItem {
            id: item.id.clone(),
            name: item.display_name.clone(),
            quantity,
            line_total,
        });
    }

    // rounded once, on the aggregate
    let service_charge = if service_charge_enabled {
        policy.charge_for(subtotal)
    } else {
        0
    };

    TotalsSummary {
        line_items,
        subtotal,
        service_charge,
        grand_total: subtotal.saturating_add(service_charge),
        total_item_count,
    }
}
