pub mod create_sale_request;
pub mod weekly_report_query;
