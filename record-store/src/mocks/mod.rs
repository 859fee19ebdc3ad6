pub mod record_client_mock;
