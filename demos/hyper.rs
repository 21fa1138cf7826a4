use prefix_router::{mux, HyperExchange};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::Body;

fn hello(ex: &mut HyperExchange) {
    let name = ex.query().get("name").unwrap_or_default().to_owned();
    *ex.response_mut().body_mut() = Body::from(format!("hello, {}!", name));
}

fn user(ex: &mut HyperExchange) {
    let id = ex.query().get("id").unwrap_or_default().to_owned();
    let format = ex.query().get("format").unwrap_or("html").to_owned();
    *ex.response_mut().body_mut() = Body::from(format!("user {} as {}", id, format));
}

#[tokio::main]
async fn main() {
    let mut mux = mux! {
        GET "/hello/:name" => hello,
        GET r"/user/:id(\d+)\.:format(\w+)" => user,
        GET r"/user/:id(\d+)" => user
    };
    mux.before_match(|ex: &mut HyperExchange| {
        println!("{} {}", ex.request().method(), ex.request().uri());
    });
    let router = mux.into_service();

    let make = make_service_fn(|_| {
        let new_router = router.clone();
        async move { Ok::<_, Never>(new_router) }
    });

    let addr = "127.0.0.1:3000";

    let server = hyper::Server::bind(&addr.parse().unwrap()).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("user: http://{}/user/123.json", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    server.await.unwrap();
}
