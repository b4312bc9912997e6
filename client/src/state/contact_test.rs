use super::*;

fn valid_form() -> ContactForm {
    ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello".to_owned(),
    }
}

#[test]
fn a_complete_form_validates_cleanly() {
    assert!(valid_form().validate().is_empty());
}

#[test]
fn blank_fields_are_each_reported() {
    let errors = ContactForm::default().validate();
    assert!(errors.name.is_some());
    assert!(errors.email.is_some());
    assert!(errors.message.is_some());
    assert!(!errors.is_empty());
}

#[test]
fn whitespace_only_fields_count_as_blank() {
    let form = ContactForm {
        name: "   ".to_owned(),
        message: "\n\t".to_owned(),
        ..valid_form()
    };
    let errors = form.validate();
    assert!(errors.name.is_some());
    assert!(errors.message.is_some());
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["plainaddress", "missing@tld", "@no-local.com", "a b@c.d"] {
        let form = ContactForm {
            email: email.to_owned(),
            ..valid_form()
        };
        assert!(
            form.validate().email.is_some(),
            "{email} should be rejected"
        );
    }
}

#[test]
fn reasonable_emails_are_accepted() {
    for email in ["ada@example.com", "a.b@sub.domain.org", "x@y.io"] {
        let form = ContactForm {
            email: email.to_owned(),
            ..valid_form()
        };
        assert!(form.validate().email.is_none(), "{email} should pass");
    }
}

#[test]
fn submit_status_defaults_to_editing() {
    assert_eq!(SubmitStatus::default(), SubmitStatus::Editing);
}
