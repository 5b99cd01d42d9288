use crate::domain::payment::NewPayment;
use crate::error::PaymentError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;

/// Structural checks on an incoming payment. All rules are evaluated before
/// failing so the caller sees every violation at once, joined with "; ".
/// The odd-amount rule is not checked here; it belongs to the workflow.
pub fn validate_payment(request: &NewPayment, now: DateTime<Utc>) -> Result<(), PaymentError> {
    let mut errors = Vec::new();

    if request.card_number.trim().is_empty() {
        errors.push("Card number is required".to_string());
    } else if request.card_number.chars().count() > 19 {
        errors.push("Card number cannot exceed 19 characters".to_string());
    }

    if request.cvv.trim().is_empty() {
        errors.push("CVV is required".to_string());
    } else if request.cvv.len() < 3
        || request.cvv.len() > 4
        || !request.cvv.chars().all(|c| c.is_ascii_digit())
    {
        errors.push("CVV must be a 3 or 4 digit number".to_string());
    }

    if request.currency_code.trim().is_empty() {
        errors.push("Currency code is required".to_string());
    } else if request.currency_code.len() != 3
        || !request.currency_code.chars().all(|c| c.is_ascii_alphabetic())
    {
        errors.push("Currency code must be exactly 3 letters".to_string());
    }

    if request.amount <= Decimal::ZERO {
        errors.push("Amount must be greater than 0".to_string());
    }

    let month_in_range = (1..=12).contains(&request.expiry_month);
    let year_in_range = (2024..=2099).contains(&request.expiry_year);
    if !month_in_range {
        errors.push("Expiry month must be between 1 and 12".to_string());
    }
    if !year_in_range {
        errors.push("Expiry year must be between 2024 and 2099".to_string());
    }

    if month_in_range && year_in_range {
        if let Some(last_day) = last_day_of_month(request.expiry_year, request.expiry_month as u32) {
            if last_day.and_time(NaiveTime::MIN).and_utc() < now {
                errors.push("Card has expired".to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PaymentError::Validation(errors.join("; ")))
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    first_of_next.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn base_request() -> NewPayment {
        NewPayment {
            card_number: "4242424242424242".to_string(),
            expiry_month: 12,
            expiry_year: 2099,
            cvv: "123".to_string(),
            amount: dec!(10.00),
            currency_code: "GBP".to_string(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn violations(request: &NewPayment) -> String {
        match validate_payment(request, now()) {
            Err(PaymentError::Validation(message)) => message,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(validate_payment(&base_request(), now()).is_ok());
    }

    #[test]
    fn blank_fields_are_reported() {
        let mut request = base_request();
        request.card_number = "   ".to_string();
        assert!(violations(&request).contains("Card number is required"));

        let mut request = base_request();
        request.cvv = String::new();
        assert!(violations(&request).contains("CVV is required"));

        let mut request = base_request();
        request.currency_code = String::new();
        assert!(violations(&request).contains("Currency code is required"));
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let mut request = base_request();
        request.amount = Decimal::ZERO;
        assert!(violations(&request).contains("Amount must be greater than 0"));

        request.amount = dec!(-5.00);
        assert!(violations(&request).contains("Amount must be greater than 0"));
    }

    #[test]
    fn oversized_card_number_is_rejected() {
        let mut request = base_request();
        request.card_number = "4".repeat(20);
        assert!(violations(&request).contains("Card number cannot exceed 19 characters"));
    }

    #[test]
    fn malformed_cvv_is_rejected() {
        let mut request = base_request();
        request.cvv = "12".to_string();
        assert!(violations(&request).contains("CVV must be a 3 or 4 digit number"));

        request.cvv = "12a4".to_string();
        assert!(violations(&request).contains("CVV must be a 3 or 4 digit number"));
    }

    #[test]
    fn malformed_currency_is_rejected() {
        let mut request = base_request();
        request.currency_code = "GBPX".to_string();
        assert!(violations(&request).contains("Currency code must be exactly 3 letters"));

        request.currency_code = "G1P".to_string();
        assert!(violations(&request).contains("Currency code must be exactly 3 letters"));
    }

    #[test]
    fn expiry_month_and_year_ranges_are_enforced() {
        let mut request = base_request();
        request.expiry_month = 13;
        assert!(violations(&request).contains("Expiry month must be between 1 and 12"));

        let mut request = base_request();
        request.expiry_year = 2023;
        assert!(violations(&request).contains("Expiry year must be between 2024 and 2099"));
    }

    #[test]
    fn card_valid_through_last_day_of_expiry_month() {
        // now is 2025-06-15: a card expiring 06/2025 is still good,
        // one expiring 05/2025 is not
        let mut request = base_request();
        request.expiry_month = 6;
        request.expiry_year = 2025;
        assert!(validate_payment(&request, now()).is_ok());

        request.expiry_month = 5;
        assert!(violations(&request).contains("Card has expired"));
    }

    #[test]
    fn all_violations_are_accumulated() {
        let request = NewPayment {
            card_number: String::new(),
            expiry_month: 5,
            expiry_year: 2024,
            cvv: String::new(),
            amount: Decimal::ZERO,
            currency_code: String::new(),
        };

        let message = violations(&request);
        assert!(message.contains("Card number is required"));
        assert!(message.contains("CVV is required"));
        assert!(message.contains("Currency code is required"));
        assert!(message.contains("Amount must be greater than 0"));
        assert!(message.contains("Card has expired"));
        assert_eq!(message.matches("; ").count(), 4);
    }
}
