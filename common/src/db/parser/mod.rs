pub mod route_log;
