use rocket::local::asynchronous::Client;

pub(crate) async fn client() -> Client {
    let rocket = crate::rocket(rocket::Config::default()).expect("valid rocket instance");
    Client::tracked(rocket).await.expect("valid client")
}
