use reqwest::Method;

use crate::client::scripted::ScriptedTransport;
use crate::client::SupplierClient;
use crate::controller::{Action, FormController};
use crate::form::{Field, FlashMessage, SupplierForm};

fn controller(transport: &ScriptedTransport) -> FormController<ScriptedTransport> {
    FormController::new(SupplierClient::new(transport.clone()))
}

#[test]
fn search_query_name_and_preferred() {
    let form = SupplierForm {
        name: "A".to_string(),
        preferred: "true".to_string(),
        ..SupplierForm::default()
    };
    assert_eq!(form.search_query().to_query_string(), "name=A&preferred=true");
}

#[test]
fn placeholders_ignore_form_contents() {
    for (name, category, preferred) in [("", "", ""), ("x", "y", "true"), ("NA", "NA", "false")] {
        let form = SupplierForm {
            id: "1".to_string(),
            name: name.to_string(),
            category: category.to_string(),
            preferred: preferred.to_string(),
        };
        let payload = form.payload();
        assert_eq!(payload.email, "supplier@company.com");
        assert_eq!(payload.phone_number, "NA");
        assert_eq!(payload.address, "NA");
        assert!(payload.products.is_empty());
    }
}

#[tokio::test]
async fn create_then_search_then_delete_session() {
    let transport = ScriptedTransport::new();
    transport.reply(
        201,
        r#"{"id":7,"name":"Acme","category":"electronics","preferred":true,"email":"supplier@company.com","phone_number":"NA","address":"NA","products":[]}"#,
    );
    transport.reply(
        200,
        r#"[{"id":7,"name":"Acme","category":"electronics","preferred":true}]"#,
    );
    transport.reply(204, "");
    transport.reply(
        404,
        r#"{"status":404,"error":"Not Found","message":"404 Not Found: The requested URL was not found on the server."}"#,
    );

    let mut ctl = controller(&transport);
    ctl.set_field(Field::Name, "Acme");
    ctl.set_field(Field::Category, "electronics");
    ctl.set_field(Field::Preferred, "true");

    for action in [Action::Create, Action::Search, Action::Delete, Action::Retrieve] {
        ctl.dispatch(action).await;
    }

    let sent = transport.requests();
    let calls: Vec<(Method, &str)> = sent.iter().map(|r| (r.method.clone(), r.path.as_str())).collect();
    assert_eq!(
        calls,
        vec![
            (Method::POST, "/suppliers"),
            (Method::GET, "/suppliers?name=Acme&category=electronics&preferred=true"),
            (Method::DELETE, "/suppliers/7"),
            (Method::GET, "/suppliers/7"),
        ]
    );
    assert_eq!(
        ctl.form(),
        &SupplierForm {
            id: "7".to_string(),
            ..SupplierForm::default()
        }
    );
    assert_eq!(
        ctl.flash(),
        Some(&FlashMessage::error(
            "404 Not Found: The requested URL was not found on the server."
        ))
    );
    assert_eq!(ctl.results().map(|r| r.len()), Some(1));
}

#[tokio::test]
async fn changing_id_between_retrieve_and_update_changes_target() {
    let transport = ScriptedTransport::new();
    transport.reply(200, r#"{"id":10,"name":"a","category":"b","preferred":false}"#);
    transport.reply(200, r#"{"id":11,"name":"a","category":"b","preferred":false}"#);

    let mut ctl = controller(&transport);
    ctl.set_field(Field::Id, "10");
    ctl.dispatch(Action::Retrieve).await;
    ctl.set_field(Field::Id, "11");
    ctl.dispatch(Action::Update).await;

    let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/suppliers/10", "/suppliers/11"]);
}
