//! Grouping of invoices into cost pools.

use abrechnung_shared::types::{InvoiceId, round_money};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use super::classify::{CostPool, RentalPool, classify_cost_type, is_energy_relief};
use super::types::Invoice;

/// An energy purchase line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyLine {
    /// Source invoice.
    pub invoice_id: InvoiceId,
    /// Display label.
    pub label: String,
    /// Invoice date.
    pub date: Option<NaiveDate>,
    /// Delivered energy in kWh.
    pub kwh: Decimal,
    /// Amount in euro.
    pub amount: Decimal,
    /// CO2 levy, when the invoice states it.
    pub co2_cost: Option<Decimal>,
}

/// The state energy price-brake credit (Preisbremse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReliefLine {
    /// Display label.
    pub label: String,
    /// Amount in euro, usually negative.
    pub amount: Decimal,
}

/// A plain cost line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostLine {
    /// Source invoice.
    pub invoice_id: InvoiceId,
    /// Display label.
    pub label: String,
    /// Invoice date.
    pub date: Option<NaiveDate>,
    /// Amount in euro.
    pub amount: Decimal,
}

/// Invoices grouped into pools, in source order, with their subtotals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CostAggregation {
    /// Energy purchases.
    pub energy_items: Vec<EnergyLine>,
    /// Price-brake credit, summed over all relief invoices.
    pub energy_relief: Option<ReliefLine>,
    /// Additional heating operating costs, including unclassified invoices.
    pub operating_items: Vec<CostLine>,
    /// Metering and device-rental lines.
    pub distribution_items: Vec<CostLine>,
    /// Cold-water and wastewater invoices.
    pub cold_water_invoices: Vec<Invoice>,
    /// Σ heating-tagged device rental.
    pub heating_device_rental: Decimal,
    /// Σ warm-water-tagged device rental.
    pub warm_water_device_rental: Decimal,
    /// Raw cost types that matched no pool, first-seen order.
    pub unclassified_cost_types: Vec<String>,
    /// Σ kWh over energy lines.
    pub energy_total_kwh: Decimal,
    /// Σ energy lines + relief.
    pub fuel_total: Decimal,
    /// Σ operating lines.
    pub operational_total: Decimal,
    /// `fuel_total + operational_total`, the pool split into Heizung and Warmwasser.
    pub heating_total: Decimal,
    /// Σ metering and device-rental lines.
    pub distribution_total: Decimal,
    /// Σ cold-water invoices.
    pub cold_water_total: Decimal,
    /// `distribution_total + cold_water_total`.
    pub separate_distribution_total: Decimal,
    /// `fuel_total + operational_total + separate_distribution_total`.
    pub grand_total: Decimal,
}

/// Groups invoices into cost pools.
pub struct InvoiceAggregator;

impl InvoiceAggregator {
    /// Aggregates `invoices` in source order.
    ///
    /// `readings_total_kwh` is used as the kWh of the first energy invoice
    /// when that invoice carries none.
    #[must_use]
    pub fn aggregate(invoices: &[Invoice], readings_total_kwh: Decimal) -> CostAggregation {
        let mut agg = CostAggregation::default();
        let mut separate_total = Decimal::ZERO;

        for invoice in invoices {
            let amount = round_money(invoice.total_amount);
            let pool = classify_cost_type(&invoice.cost_type);
            if pool.is_separately_distributed() {
                separate_total += amount;
            }

            match pool {
                CostPool::Ignored => {}
                CostPool::Energy if is_energy_relief(invoice) => {
                    let relief = agg.energy_relief.get_or_insert_with(|| ReliefLine {
                        label: invoice.item_label("Preisbremse Energie"),
                        amount: Decimal::ZERO,
                    });
                    relief.amount += amount;
                }
                CostPool::Energy => {
                    let kwh = match invoice.energy_kwh {
                        Some(kwh) if !kwh.is_zero() => kwh,
                        _ if agg.energy_items.is_empty() => readings_total_kwh,
                        _ => Decimal::ZERO,
                    };
                    agg.energy_items.push(EnergyLine {
                        invoice_id: invoice.id,
                        label: invoice.display_label(),
                        date: invoice.invoice_date,
                        kwh,
                        amount,
                        co2_cost: invoice.co2_cost,
                    });
                }
                CostPool::Operating => agg.operating_items.push(cost_line(invoice, amount)),
                CostPool::Unclassified => {
                    if !agg.unclassified_cost_types.contains(&invoice.cost_type) {
                        agg.unclassified_cost_types.push(invoice.cost_type.clone());
                    }
                    agg.operating_items.push(CostLine {
                        label: invoice.item_label("Sonstige"),
                        ..cost_line(invoice, amount)
                    });
                }
                CostPool::Metering => agg.distribution_items.push(cost_line(invoice, amount)),
                CostPool::DeviceRental(rental_pool) => {
                    match rental_pool {
                        RentalPool::Heating => agg.heating_device_rental += amount,
                        RentalPool::WarmWater => agg.warm_water_device_rental += amount,
                    }
                    agg.distribution_items.push(cost_line(invoice, amount));
                }
                CostPool::ColdWater => {
                    agg.cold_water_total += amount;
                    agg.cold_water_invoices.push(invoice.clone());
                }
            }
        }

        agg.energy_total_kwh = agg.energy_items.iter().map(|line| line.kwh).sum();
        let energy_amount: Decimal = agg.energy_items.iter().map(|line| line.amount).sum();
        let relief_amount = agg
            .energy_relief
            .as_ref()
            .map_or(Decimal::ZERO, |relief| relief.amount);

        agg.fuel_total = energy_amount + relief_amount;
        agg.operational_total = agg.operating_items.iter().map(|line| line.amount).sum();
        agg.heating_total = agg.fuel_total + agg.operational_total;
        agg.distribution_total = agg.distribution_items.iter().map(|line| line.amount).sum();
        agg.separate_distribution_total = separate_total;
        agg.grand_total = agg.fuel_total + agg.operational_total + agg.separate_distribution_total;

        debug!(
            energy_items = agg.energy_items.len(),
            operating_items = agg.operating_items.len(),
            distribution_items = agg.distribution_items.len(),
            cold_water_invoices = agg.cold_water_invoices.len(),
            grand_total = %agg.grand_total,
            "Invoices grouped"
        );

        agg
    }
}

fn cost_line(invoice: &Invoice, amount: Decimal) -> CostLine {
    CostLine {
        invoice_id: invoice.id,
        label: invoice.item_label(&invoice.cost_type),
        date: invoice.invoice_date,
        amount,
    }
}
