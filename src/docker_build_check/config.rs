use crate::docker_build_check::check;

#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub check: check::Config,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub listen_addr: String,
    pub listen_port: u16,
    pub worker_threads: u16,
}

impl ServerConfig {
    pub fn listen_addr_with_port(&self) -> String {
        format!("{}:{}", self.listen_addr, self.listen_port)
    }
}
