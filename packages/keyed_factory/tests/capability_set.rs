//! Integration tests for the `keyed_factory` package.
//!
//! These tests use the factory the way a consuming program does: products
//! are trait objects, and callers depend only on the capability set the
//! trait declares, never on the concrete product types behind the keys.

use std::sync::Arc;
use std::thread;

use keyed_factory::{Error, KeyedFactory};

/// The capability set every produced value exposes.
trait Notifier {
    fn channel(&self) -> &'static str;

    fn render(&self, message: &str) -> String;
}

struct Email;

impl Notifier for Email {
    fn channel(&self) -> &'static str {
        "email"
    }

    fn render(&self, message: &str) -> String {
        format!("Subject: {message}")
    }
}

struct Sms;

impl Notifier for Sms {
    fn channel(&self) -> &'static str {
        "sms"
    }

    fn render(&self, message: &str) -> String {
        // Text messages carry no subject line.
        message.to_string()
    }
}

fn notifier_factory() -> KeyedFactory<String, Box<dyn Notifier>> {
    let mut factory: KeyedFactory<String, Box<dyn Notifier>> = KeyedFactory::new();

    factory
        .register("email".to_string(), |()| Box::new(Email))
        .expect("the factory starts empty");
    factory
        .register("sms".to_string(), |()| Box::new(Sms))
        .expect("the factory starts empty");

    factory
}

#[test]
fn callers_depend_only_on_the_capability_set() {
    let factory = notifier_factory();

    // Every produced value answers the same operations; which concrete
    // type serves each key is invisible here.
    let email = factory.create("email").expect("the key is registered");
    let sms = factory.create("sms").expect("the key is registered");

    assert_eq!(email.channel(), "email");
    assert_eq!(email.render("Server down"), "Subject: Server down");
    assert_eq!(sms.channel(), "sms");
    assert_eq!(sms.render("Server down"), "Server down");
}

#[test]
fn unknown_keys_fail_with_the_rendered_key() {
    let factory = notifier_factory();

    let Err(error) = factory.create("carrier-pigeon") else {
        panic!("no notifier was registered under that key");
    };

    assert!(matches!(&error, Error::UnknownKey { .. }));
    assert!(error.to_string().contains("carrier-pigeon"));
}

#[test]
fn creation_arguments_reach_the_creator() {
    /// An email notifier that signs every message.
    struct SignedEmail {
        signature: String,
    }

    impl Notifier for SignedEmail {
        fn channel(&self) -> &'static str {
            "email"
        }

        fn render(&self, message: &str) -> String {
            format!("Subject: {message}\n-- {}", self.signature)
        }
    }

    let mut factory: KeyedFactory<String, Box<dyn Notifier>, String> = KeyedFactory::new();
    factory
        .register("email".to_string(), |signature: String| {
            Box::new(SignedEmail { signature })
        })
        .expect("the factory starts empty");

    let notifier = factory
        .create_with("email", "The Ops Team".to_string())
        .expect("the key is registered");

    assert_eq!(
        notifier.render("All clear"),
        "Subject: All clear\n-- The Ops Team"
    );
}

#[test]
fn a_populated_factory_serves_concurrent_callers() {
    let factory = Arc::new(notifier_factory());

    let handles: Vec<_> = ["email", "sms"]
        .into_iter()
        .map(|channel| {
            let factory = Arc::clone(&factory);

            thread::spawn(move || {
                let notifier = factory.create(channel).expect("the key is registered");

                assert_eq!(notifier.channel(), channel);
                notifier.render("Server down")
            })
        })
        .collect();

    let renderings: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("no thread panicked"))
        .collect();

    assert_eq!(renderings, ["Subject: Server down", "Server down"]);
}

#[test]
fn registrations_after_removal_are_fresh() {
    let mut factory = notifier_factory();

    assert!(factory.remove("sms"));
    assert!(factory.create("sms").is_err());

    factory
        .register("sms".to_string(), |()| Box::new(Sms))
        .expect("the key was just removed");

    assert_eq!(
        factory
            .create("sms")
            .expect("the key is registered again")
            .channel(),
        "sms"
    );
}
