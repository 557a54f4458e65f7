//! Output formatting module

use courier_app::app::Quote;
use courier_domain::model::{Dimensions, Parcel, ShippingRates};
use courier_types::{format_usd, OutputFormat, Result};

pub fn output_quote(output_format: OutputFormat, quote: &Quote) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(quote)?);
        return Ok(());
    }

    println!("\nShipping Quote");
    println!("==============");
    for (i, line) in quote.parcels.iter().enumerate() {
        let overweight = if line.overweight_cost > 0.0 {
            format!(" (incl. {} overweight)", format_usd(line.overweight_cost))
        } else {
            String::new()
        };
        println!(
            "{:>3}. {:<7} {:>10}{}",
            i + 1,
            line.parcel_type.label(),
            format_usd(line.total_cost),
            overweight
        );
    }
    println!("{}", "-".repeat(40));
    println!("Discount:        {:>10}", format_usd(quote.discount));
    println!("Speedy Shipping: {:>10}", format_usd(quote.speedy_shipping_cost));
    println!("Total:           {:>10}", format_usd(quote.total_cost));

    Ok(())
}

pub fn output_parcel(output_format: OutputFormat, dimensions: &Dimensions, parcel: &Parcel) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(parcel)?);
        return Ok(());
    }

    println!("\nParcel");
    println!("======");
    println!("Dimensions:      {} cm", dimensions);
    println!("Weight:          {:.2} kg", parcel.weight_kg());
    println!("Type:            {}", parcel.parcel_type());
    println!("Delivery cost:   {}", format_usd(parcel.delivery_cost()));
    println!("Overweight cost: {}", format_usd(parcel.overweight_cost()));
    println!("Total:           {}", format_usd(parcel.total_cost()));

    Ok(())
}

pub fn output_rates(output_format: OutputFormat, rates: &ShippingRates) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&rates.all())?);
        return Ok(());
    }

    println!(
        "{:<8} {:>10} {:>12} {:>14}",
        "Type", "Delivery", "Limit (kg)", "Over (per kg)"
    );
    println!("{}", "-".repeat(47));
    for rate in rates.all() {
        println!(
            "{:<8} {:>10} {:>12.1} {:>14}",
            rate.parcel_type.label(),
            format_usd(rate.delivery_cost),
            rate.weight_limit_kg,
            format_usd(rate.overweight_cost_per_kg)
        );
    }

    let missing = rates.missing_types();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|t| t.label()).collect();
        println!("\nNo rate for: {}", names.join(", "));
    }

    Ok(())
}
