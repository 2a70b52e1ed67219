//! Payment page query parameter names.

pub const PAYMENT_CURRENCY: &str = "payment_currency";
pub const PROJECT_ID: &str = "project_id";
pub const CARD_OPERATION_TYPE: &str = "card_operation_type";
pub const CUSTOMER_ID: &str = "customer_id";
pub const CUSTOMER_ACCOUNT_NUMBER: &str = "customer_account_number";
pub const PAYMENT_ID: &str = "payment_id";
pub const PAYMENT_AMOUNT: &str = "payment_amount";
pub const TARGET_ELEMENT: &str = "target_element";
pub const REDIRECT: &str = "redirect";
pub const MERCHANT_SUCCESS_URL: &str = "merchant_success_url";
pub const MERCHANT_FAIL_URL: &str = "merchant_fail_url";
pub const MERCHANT_RETURN_URL: &str = "merchant_return_url";

pub const CUSTOMER_EMAIL: &str = "customer_email";
pub const CUSTOMER_FIRST_NAME: &str = "customer_first_name";
pub const CUSTOMER_LAST_NAME: &str = "customer_last_name";
pub const CUSTOMER_PHONE: &str = "customer_phone";
pub const CUSTOMER_DAY_OF_BIRTH: &str = "customer_day_of_birth";
pub const CUSTOMER_COUNTRY: &str = "customer_country";
pub const CUSTOMER_STATE: &str = "customer_state";
pub const CUSTOMER_CITY: &str = "customer_city";
pub const CUSTOMER_ADDRESS: &str = "customer_address";
pub const CUSTOMER_ZIP: &str = "customer_zip";

pub const BILLING_COUNTRY: &str = "billing_country";
pub const BILLING_REGION_CODE: &str = "billing_region_code";
pub const BILLING_CITY: &str = "billing_city";
pub const BILLING_ADDRESS: &str = "billing_address";
pub const BILLING_POSTAL: &str = "billing_postal";

/// Only card sales are requested.
pub const SALE_OPERATION: &str = "sale";

/// DOM element the embedded widget renders into.
pub const PAYMENT_CONTAINER: &str = "ecommpay-payment-container";
