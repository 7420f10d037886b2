//! Formats the amount input of the transaction form while the user types.

use axum::{
    Form,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{currency::string_to_currency_format, transaction::form::amount_input};

/// The form data sent by the amount input.
#[derive(Debug, Deserialize)]
pub struct AmountForm {
    /// The raw text in the amount input.
    #[serde(default)]
    pub amount: String,
}

/// A route handler that returns the amount input with its value formatted
/// as currency, e.g. "1234.567" becomes "1,234.56".
pub async fn format_amount_endpoint(Form(form): Form<AmountForm>) -> Response {
    let formatted = string_to_currency_format(&form.amount);

    tracing::debug!("formatted amount {:?} as {formatted:?}", form.amount);

    amount_input(&formatted, true).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{Form, http::StatusCode};
    use scraper::Selector;

    use crate::{
        test_utils::{assert_content_type, assert_valid_html, parse_html_fragment},
        transaction::amount_endpoint::{AmountForm, format_amount_endpoint},
    };

    async fn formatted_value(amount: &str) -> String {
        let response = format_amount_endpoint(Form(AmountForm {
            amount: amount.to_owned(),
        }))
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);

        html.select(&Selector::parse("input[name=amount]").unwrap())
            .next()
            .expect("No amount input found")
            .value()
            .attr("value")
            .unwrap_or_default()
            .to_owned()
    }

    #[tokio::test]
    async fn formats_amount() {
        assert_eq!(formatted_value("1234567").await, "1,234,567");
        assert_eq!(formatted_value("$1234.567").await, "1,234.56");
    }

    #[tokio::test]
    async fn empty_amount_stays_empty() {
        assert_eq!(formatted_value("").await, "");
    }
}
