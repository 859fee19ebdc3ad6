pub mod secret_client_mock;
