pub(crate) mod stock_service;
