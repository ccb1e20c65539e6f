//! Plain-text error responses

use salvo::{
    catcher::Catcher,
    http::{ResBody, header::CONTENT_TYPE},
    prelude::*,
};

/// Catcher that renders every error response as a `text/plain` body.
pub(crate) fn plain_text_catcher() -> Catcher {
    Catcher::default().hoop(plain_text_error)
}

#[handler]
async fn plain_text_error(res: &mut Response, ctrl: &mut FlowCtrl) {
    let message = match &res.body {
        ResBody::Error(error) => error.brief.clone(),
        _ => res
            .status_code
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Error")
            .to_owned(),
    };

    res.headers_mut().remove(CONTENT_TYPE);
    res.render(Text::Plain(message));

    ctrl.skip_rest();
}
