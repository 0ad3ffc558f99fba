// cors.rs
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::{options, Request, Response};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Adds permissive CORS headers to every response.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _req: &'r Request<'_>, res: &mut Response<'r>) {
        res.set_header(Header::new("Access-Control-Allow-Origin", ALLOW_ORIGIN));
        res.set_header(Header::new("Access-Control-Allow-Methods", ALLOW_METHODS));
        res.set_header(Header::new("Access-Control-Allow-Headers", ALLOW_HEADERS));
    }
}

/// Answers CORS preflight for any path with an empty 200.
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::Ok
}
