#[derive(Debug, PartialEq, Clone)]
pub enum Response {
    OK { msg: String },
    Error { msg: String },
}

impl Response {
    pub fn ok(msg: &str) -> Response {
        Response::OK { msg: msg.to_string() }
    }

    pub fn error(msg: &str) -> Response {
        Response::Error { msg: msg.to_string() }
    }

    /// Console text of the response. Errors are shown the same way as
    /// results, the menu keeps running after either.
    pub fn serialize(&self) -> String {
        match *self {
            Response::OK { ref msg } => format!("{}\n", msg),
            Response::Error { ref msg } => format!("{}\n", msg),
        }
    }
}
