//! Order quoting use case

use chrono::{DateTime, Utc};
use courier_domain::model::{Discount, Order, OrderRequest, Parcel};
use courier_domain::service::{process_order, ParcelFactory};
use courier_types::{format_usd, ParcelType, Result};
use serde::Serialize;

use crate::config::Config;
use crate::constants::standard_discounts;

/// Price breakdown for one parcel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteLine {
    pub parcel_type: ParcelType,
    pub weight_kg: f64,
    pub delivery_cost: f64,
    pub overweight_cost: f64,
    pub total_cost: f64,
}

impl From<&Parcel> for QuoteLine {
    fn from(parcel: &Parcel) -> Self {
        Self {
            parcel_type: parcel.parcel_type(),
            weight_kg: parcel.weight_kg(),
            delivery_cost: parcel.delivery_cost(),
            overweight_cost: parcel.overweight_cost(),
            total_cost: parcel.total_cost(),
        }
    }
}

/// Priced order as shown to the customer
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub parcels: Vec<QuoteLine>,
    pub discount: f64,
    pub speedy_shipping: bool,
    pub speedy_shipping_cost: f64,
    pub total_cost: f64,
    pub quoted_at: DateTime<Utc>,
}

impl Quote {
    pub fn from_order(order: &Order, quoted_at: DateTime<Utc>) -> Self {
        Self {
            parcels: order.parcels().iter().map(QuoteLine::from).collect(),
            discount: order.discount(),
            speedy_shipping: order.is_speedy_shipping(),
            speedy_shipping_cost: order.speedy_shipping_cost(),
            total_cost: order.total_cost(),
            quoted_at,
        }
    }
}

/// Discounts granted to every order for this run
///
/// The standard discounts apply unless the config turns them off or the
/// caller asks for none. Request discounts are added later by [`price_order`].
pub fn order_discounts(config: &Config, no_discounts: bool) -> Vec<Discount> {
    if config.standard_discounts && !no_discounts {
        standard_discounts()
    } else {
        Vec::new()
    }
}

/// Force speedy shipping on; never turns it off
pub fn apply_speedy_override(request: &mut OrderRequest, speedy: bool) {
    if speedy {
        request.speedy_shipping = true;
    }
}

/// Build every parcel in the request and process the order
///
/// `discounts` are applied together with the request's own discounts.
/// Fails on the first parcel whose type has no rate.
pub fn price_order(
    factory: &ParcelFactory,
    request: &OrderRequest,
    discounts: &[Discount],
) -> Result<Order> {
    let parcels = request
        .parcels
        .iter()
        .map(|p| factory.build(p.dimensions(), p.weight_kg))
        .collect::<Result<Vec<_>>>()?;

    let mut all_discounts = discounts.to_vec();
    all_discounts.extend_from_slice(&request.discounts);

    Ok(process_order(parcels, request.speedy_shipping, &all_discounts))
}

/// Price an order, log the breakdown and return the quote
pub fn quote_order(
    factory: &ParcelFactory,
    request: &OrderRequest,
    discounts: &[Discount],
) -> Result<Quote> {
    let order = price_order(factory, request, discounts)?;
    log_order(&order);
    Ok(Quote::from_order(&order, Utc::now()))
}

/// Write the order breakdown to the debug log
pub fn log_order(order: &Order) {
    for parcel in order.parcels() {
        tracing::debug!("{} Parcel: {}", parcel.parcel_type(), format_usd(parcel.total_cost()));
    }
    tracing::debug!("{}", "-".repeat(63));
    tracing::debug!("Discount: {}", format_usd(order.discount()));
    tracing::debug!("Speedy Shipping: {}", format_usd(order.speedy_shipping_cost()));
    tracing::debug!("Total: {}", format_usd(order.total_cost()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::standard_rates;
    use std::io;
    use std::sync::{Arc, Mutex};
    use courier_domain::model::ParcelRequest;
    use courier_types::Error;

    fn parcel(length: f64, width: f64, height: f64, weight_kg: Option<f64>) -> ParcelRequest {
        ParcelRequest {
            length,
            width,
            height,
            weight_kg,
        }
    }

    fn factory() -> ParcelFactory {
        ParcelFactory::new(standard_rates())
    }

    #[test]
    fn test_mixed_order() {
        let request = OrderRequest {
            speedy_shipping: false,
            parcels: vec![
                parcel(1.0, 1.0, 1.0, None),
                parcel(10.0, 15.0, 20.0, None),
                parcel(75.0, 50.0, 10.0, Some(8.0)),
                parcel(110.0, 50.0, 20.0, None),
                parcel(75.0, 50.0, 10.0, Some(55.0)),
            ],
            discounts: Vec::new(),
        };
        let quote = quote_order(&factory(), &request, &standard_discounts()).unwrap();
        let types: Vec<ParcelType> = quote.parcels.iter().map(|l| l.parcel_type).collect();
        assert_eq!(
            types,
            vec![
                ParcelType::Small,
                ParcelType::Medium,
                ParcelType::Large,
                ParcelType::Xl,
                ParcelType::Heavy
            ]
        );
        // 3 + 8 + 19 + 25 + 55
        assert!((quote.total_cost - 110.0).abs() < 0.01);
        assert_eq!(quote.discount, 0.0);
        assert_eq!(quote.speedy_shipping_cost, 0.0);
    }

    #[test]
    fn test_request_discounts_add_to_standard() {
        let request = OrderRequest {
            speedy_shipping: true,
            parcels: vec![parcel(60.0, 1.0, 1.0, None), parcel(60.0, 1.0, 1.0, None)],
            discounts: vec![Discount::every(ParcelType::Large, 2).unwrap()],
        };
        let order = price_order(&factory(), &request, &standard_discounts()).unwrap();
        assert!((order.discount() - 15.0).abs() < 0.01);
        assert!((order.total_cost() - 30.0).abs() < 0.01);
        assert!((order.speedy_shipping_cost() - 15.0).abs() < 0.01);
    }

    #[test]
    fn test_missing_rate_fails_whole_order() {
        let rates = standard_rates()
            .all()
            .into_iter()
            .filter(|r| r.parcel_type != ParcelType::Heavy)
            .cloned()
            .collect();
        let request = OrderRequest {
            speedy_shipping: false,
            parcels: vec![parcel(1.0, 1.0, 1.0, None), parcel(1.0, 1.0, 1.0, Some(60.0))],
            discounts: Vec::new(),
        };
        let err = quote_order(&ParcelFactory::new(rates), &request, &[]).unwrap_err();
        assert!(matches!(err, Error::MissingRate(ParcelType::Heavy)));
    }

    #[test]
    fn test_quote_serializes_lowercase_types() {
        let request = OrderRequest {
            speedy_shipping: false,
            parcels: vec![parcel(200.0, 1.0, 1.0, None)],
            discounts: Vec::new(),
        };
        let quote = quote_order(&factory(), &request, &[]).unwrap();
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["parcels"][0]["parcel_type"], "xl");
        assert_eq!(json["total_cost"], 25.0);
    }

    #[test]
    fn test_order_discounts_standard_by_default() {
        let discounts = order_discounts(&Config::default(), false);
        assert_eq!(discounts, standard_discounts());
    }

    #[test]
    fn test_order_discounts_disabled_by_flag() {
        assert!(order_discounts(&Config::default(), true).is_empty());
    }

    #[test]
    fn test_order_discounts_disabled_by_config() {
        let config = Config {
            standard_discounts: false,
            ..Config::default()
        };
        assert!(order_discounts(&config, false).is_empty());
        assert!(order_discounts(&config, true).is_empty());
    }

    #[test]
    fn test_request_discounts_still_apply_without_standard() {
        let config = Config {
            standard_discounts: false,
            ..Config::default()
        };
        // four Small parcels: the standard Small group would free one
        let request = OrderRequest {
            speedy_shipping: false,
            parcels: (0..4).map(|_| parcel(1.0, 1.0, 1.0, None)).collect(),
            discounts: vec![Discount::every(ParcelType::Small, 2).unwrap()],
        };
        let order = price_order(&factory(), &request, &order_discounts(&config, false)).unwrap();
        assert!((order.discount() - 6.0).abs() < 0.01);
        assert!((order.total_cost() - 6.0).abs() < 0.01);

        let with_standard =
            price_order(&factory(), &request, &order_discounts(&Config::default(), false)).unwrap();
        assert!((with_standard.discount() - 9.0).abs() < 0.01);
    }

    #[test]
    fn test_speedy_override_forces_speedy() {
        let mut request = OrderRequest {
            speedy_shipping: false,
            parcels: vec![parcel(60.0, 1.0, 1.0, None)],
            discounts: Vec::new(),
        };
        apply_speedy_override(&mut request, true);
        assert!(request.speedy_shipping);
        let order = price_order(&factory(), &request, &[]).unwrap();
        assert!((order.total_cost() - 30.0).abs() < 0.01);
        assert!((order.speedy_shipping_cost() - 15.0).abs() < 0.01);
    }

    #[test]
    fn test_speedy_override_never_turns_off() {
        let mut request = OrderRequest {
            speedy_shipping: true,
            ..OrderRequest::default()
        };
        apply_speedy_override(&mut request, false);
        assert!(request.speedy_shipping);

        let mut plain = OrderRequest::default();
        apply_speedy_override(&mut plain, false);
        assert!(!plain.speedy_shipping);
    }

    #[test]
    fn test_undiscounted_quote_formats_zero_discount() {
        let request = OrderRequest {
            speedy_shipping: false,
            parcels: vec![parcel(60.0, 1.0, 1.0, None)],
            discounts: Vec::new(),
        };
        let quote = quote_order(&factory(), &request, &standard_discounts()).unwrap();
        assert!(quote.discount.is_sign_positive());
        assert_eq!(format_usd(quote.discount), "$0.00");
        let json = serde_json::to_string(&quote).unwrap();
        assert!(!json.contains("-0.0"));
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_log(order: &Order) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_target(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || log_order(order));
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_log_order_breakdown() {
        let request = OrderRequest {
            speedy_shipping: true,
            parcels: vec![
                parcel(1.0, 1.0, 1.0, None),
                parcel(75.0, 50.0, 10.0, Some(8.0)),
            ],
            discounts: Vec::new(),
        };
        let order = price_order(&factory(), &request, &standard_discounts()).unwrap();
        let log = captured_log(&order);

        assert!(log.contains("Small Parcel: $3.00"));
        assert!(log.contains("Large Parcel: $19.00"));
        assert!(log.contains("Discount: $0.00"));
        assert!(log.contains("Speedy Shipping: $22.00"));
        assert!(log.contains("Total: $44.00"));
        assert!(!log.contains("$-"));
    }
}
