use maud::{Markup, html};
use time::Date;

use crate::{
    TransactionType,
    category::Category,
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// The ID of the amount input, also used as the htmx swap target.
pub const AMOUNT_INPUT_ID: &str = "amount";

/// The text input for the transaction amount.
///
/// Whenever the value changes, the input posts itself to
/// [endpoints::FORMAT_AMOUNT] and is replaced with a copy that shows the
/// formatted amount, e.g. "1234.5" becomes "1,234.5".
pub fn amount_input(value: &str, autofocus: bool) -> Markup {
    html! {
        input
            name="amount"
            id=(AMOUNT_INPUT_ID)
            type="text"
            inputmode="decimal"
            autocomplete="off"
            placeholder="0.00"
            required
            value=(value)
            autofocus[autofocus]
            hx-post=(endpoints::FORMAT_AMOUNT)
            hx-trigger="change"
            hx-target="this"
            hx-swap="outerHTML"
            class=(FORM_TEXT_INPUT_STYLE);
    }
}

pub struct TransactionFormDefaults {
    pub transaction_type: TransactionType,
    pub date: Date,
    pub max_date: Date,
}

pub fn transaction_form_fields(
    defaults: &TransactionFormDefaults,
    available_categories: &[Category],
) -> Markup {
    html! {
        input
            type="hidden"
            name="transaction_type"
            value=(defaults.transaction_type.as_str());

        div
        {
            label
                for=(AMOUNT_INPUT_ID)
                class=(FORM_LABEL_STYLE)
            {
                "Amount"
            }

            // w-full needed to ensure input takes the full width when prefilled with a value
            div class="input-wrapper w-full"
            {
                (amount_input("", true))
            }
        }

        div
        {
            label
                for="category_id"
                class=(FORM_LABEL_STYLE)
            {
                "Category"
            }

            select
                name="category_id"
                id="category_id"
                required
                class=(FORM_TEXT_INPUT_STYLE)
            {
                option value="" { "Select a category" }

                @for category in available_categories {
                    option value=(category.id) { (category.name) }
                }
            }
        }

        div
        {
            label
                for="date"
                class=(FORM_LABEL_STYLE)
            {
                "Date"
            }

            input
                name="date"
                id="date"
                type="date"
                max=(defaults.max_date)
                value=(defaults.date)
                required
                class=(FORM_TEXT_INPUT_STYLE);
        }

        div
        {
            label
                for="note"
                class=(FORM_LABEL_STYLE)
            {
                "Note"
            }

            input
                name="note"
                id="note"
                type="text"
                placeholder="Note (optional)"
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}
