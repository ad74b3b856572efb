use mailgraph_mailbox::{EmailAddress, MessageParser, ParseOutcome, SeenIdentifiers};
use pretty_assertions::assert_eq;

const SENT_MAIL: &str = r"Message-ID: <18782981.1075855378110.JavaMail.evans@thyme>
Date: Mon, 14 May 2001 16:39:00 -0700 (PDT)
From: phillip.allen@enron.com
To: tim.belden@enron.com, john.lavorato@enron.com,
	greg.piper@enron.com
Subject: Re: forecast
Mime-Version: 1.0
Content-Type: text/plain; charset=us-ascii
Content-Transfer-Encoding: 7bit
X-From: Phillip K Allen
X-To: Tim Belden <Tim Belden/Enron@EnronXGate>
X-cc: 
X-bcc: 
X-Folder: \Phillip_Allen_Jan2002_1\Allen, Phillip K.\'Sent Mail
X-Origin: Allen-P
X-FileName: pallen (Non-Privileged).pst

Here is our forecast

 -----Original Message-----
From: 	Belden, Tim  
Sent:	Monday, May 14, 2001 3:12 PM
To:	Allen, Phillip K.
";

fn addresses(raw: &[&str]) -> Vec<EmailAddress> {
    raw.iter().map(|r| EmailAddress::normalize(r)).collect()
}

#[test]
fn parses_sent_mail_headers() {
    let parser = MessageParser::default();
    let mut seen = SeenIdentifiers::new();

    let ParseOutcome::Message(message) = parser.parse(SENT_MAIL, &mut seen) else {
        panic!("expected a message");
    };

    assert_eq!(
        message.sender().map(EmailAddress::as_str),
        Some("phillip.allen@enron.com")
    );

    // Folded continuation lines of the recipient header are not followed.
    let recipients: Vec<EmailAddress> = message.recipients.into_iter().collect();
    assert_eq!(
        recipients,
        addresses(&["john.lavorato@enron.com", "tim.belden@enron.com"])
    );
}

#[test]
fn same_message_in_two_folders_is_counted_once() {
    let parser = MessageParser::default();
    let mut seen = SeenIdentifiers::new();

    let sent = parser.parse(SENT_MAIL, &mut seen);
    let all_documents = parser.parse(SENT_MAIL, &mut seen);

    assert!(!sent.is_duplicate());
    assert!(all_documents.is_duplicate());
    assert_eq!(seen.len(), 1);
}

#[test]
fn mailto_wrapped_recipients_are_normalized() {
    let parser = MessageParser::default();
    let mut seen = SeenIdentifiers::new();
    let raw = "Message-ID: <2.JavaMail.evans@thyme>\n\
               From: <mailto:sara.shackleton@enron.com>\n\
               To: [mailto:mark.taylor@enron.com], <tana.jones@enron.com>,\n";

    let outcome = parser.parse(raw, &mut seen);
    let message = outcome.message().expect("message");

    assert_eq!(
        message.sender().map(EmailAddress::as_str),
        Some("sara.shackleton@enron.com")
    );
    assert_eq!(
        message.recipients.iter().cloned().collect::<Vec<_>>(),
        addresses(&["mark.taylor@enron.com", "tana.jones@enron.com"])
    );
}
