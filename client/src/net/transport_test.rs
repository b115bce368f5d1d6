use super::*;

#[test]
fn unavailable_message_names_server_rendering() {
    assert!(unavailable_message().contains("server rendering"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_refuses_requests() {
    use portal::remote::Method;

    let request = HttpRequest {
        method: Method::Get,
        url: "https://x.supabase.co/auth/v1/health".to_owned(),
        headers: Vec::new(),
        body: None,
    };
    let err = futures::executor::block_on(BrowserTransport.execute(request)).unwrap_err();
    assert!(matches!(err, RemoteError::Transport(_)));
}
