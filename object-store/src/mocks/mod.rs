pub mod object_client_mock;
