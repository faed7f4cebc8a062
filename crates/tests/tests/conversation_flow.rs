use std::time::Duration;

use frontdesk_agent::FrontDeskAgent;
use frontdesk_core::{BusinessHours, BusinessInfo, Message, QuickAction, Sender, GREETING};
use frontdesk_observability::AppMetrics;

fn sample_business() -> BusinessInfo {
    BusinessInfo {
        name: "Cedar Grove Dental".to_string(),
        hours: BusinessHours {
            weekday: "Monday - Friday: 8:00 AM - 5:00 PM".to_string(),
            saturday: "Saturday: 9:00 AM - 1:00 PM".to_string(),
            sunday: "Sunday: Closed".to_string(),
        },
        phone: "+1 (555) 210-7733".to_string(),
        email: "front@cedargrove.example".to_string(),
        address: "88 Cedar Grove Ave, Maplewood".to_string(),
    }
}

fn agent_with_delay(millis: u64) -> FrontDeskAgent {
    FrontDeskAgent::new(sample_business(), AppMetrics::shared())
        .with_reply_delay(Duration::from_millis(millis))
}

async fn ask(agent: &FrontDeskAgent, text: &str) -> Message {
    agent
        .submit(text)
        .expect("message should be accepted")
        .reply()
        .await
        .expect("reply task should join")
        .expect("reply should arrive")
}

#[tokio::test]
async fn greeting_opens_every_session() {
    let agent = agent_with_delay(20);

    let transcript = agent.transcript();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].id, 1);
    assert_eq!(transcript[0].sender, Sender::Bot);
    assert_eq!(transcript[0].text, GREETING);
}

#[tokio::test]
async fn hours_question_gets_hours_reply() {
    let agent = agent_with_delay(20);

    let reply = ask(&agent, "What are your business hours?").await;
    assert_eq!(reply.sender, Sender::Bot);
    assert!(reply.text.contains("Monday - Friday: 8:00 AM - 5:00 PM"));
    assert!(reply.text.contains("Saturday: 9:00 AM - 1:00 PM"));
    assert!(reply.text.contains("Sunday: Closed"));
}

#[tokio::test]
async fn contact_question_gets_contact_reply() {
    let agent = agent_with_delay(20);

    let reply = ask(&agent, "How can I reach you?").await;
    assert!(reply.text.contains("Phone: +1 (555) 210-7733"));
    assert!(reply.text.contains("Email: front@cedargrove.example"));
}

#[tokio::test]
async fn location_question_gets_location_reply() {
    let agent = agent_with_delay(20);

    let reply = ask(&agent, "What is your address?").await;
    assert!(reply.text.contains("88 Cedar Grove Ave, Maplewood"));
}

#[tokio::test]
async fn hours_and_contact_merge_into_one_reply() {
    let agent = agent_with_delay(20);

    let reply = ask(&agent, "When can I call you?").await;
    assert!(reply.text.starts_with("📞 Contact & Hours Information:"));
    assert!(reply.text.contains("Phone: +1 (555) 210-7733"));
    assert!(reply.text.contains("Monday - Friday: 8:00 AM - 5:00 PM"));

    let transcript = agent.transcript();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[2].sender, Sender::Bot);
}

#[tokio::test]
async fn unrelated_question_gets_fallback() {
    let agent = agent_with_delay(20);

    let reply = ask(&agent, "Do you sell gift cards?").await;
    assert!(reply.text.contains("• Business hours"));
    assert!(reply.text.contains("• Contact number"));
    assert!(reply.text.contains("• Location information"));

    let snapshot = agent.metrics().snapshot();
    assert_eq!(snapshot.fallback_total, 1);
}

#[tokio::test]
async fn blank_input_is_ignored() {
    let agent = agent_with_delay(20);

    assert!(agent.submit("").is_none());
    assert!(agent.submit("   \t ").is_none());

    assert_eq!(agent.transcript().len(), 1);
    assert!(!agent.is_typing());
    assert_eq!(agent.metrics().snapshot().messages_total, 0);
}

#[tokio::test]
async fn user_text_is_stored_as_typed() {
    let agent = agent_with_delay(20);

    let pending = agent.submit("  are you OPEN today?  ").expect("message");
    assert_eq!(pending.user_message.text, "  are you OPEN today?  ");

    let reply = pending
        .reply()
        .await
        .expect("reply task should join")
        .expect("reply should arrive");
    assert!(reply.text.contains("Monday - Friday: 8:00 AM - 5:00 PM"));
}

#[tokio::test]
async fn ids_and_timestamps_grow_monotonically() {
    let agent = agent_with_delay(10);

    ask(&agent, "what time do you open?").await;
    ask(&agent, "where can I find you?").await;
    ask(&agent, "thanks!").await;

    let transcript = agent.transcript();
    assert_eq!(transcript.len(), 7);

    for pair in transcript.windows(2) {
        assert_eq!(pair[1].id, pair[0].id + 1);
        assert!(pair[1].timestamp >= pair[0].timestamp);
    }
}

#[tokio::test]
async fn rapid_submits_supersede_pending_reply() {
    let agent = agent_with_delay(200);

    let first = agent.submit("what are your hours?").expect("first message");
    let second = agent.submit("where are you?").expect("second message");

    assert!(first
        .reply()
        .await
        .expect("first reply task should join")
        .is_none());
    let reply = second
        .reply()
        .await
        .expect("second reply task should join")
        .expect("second reply should arrive");
    assert!(reply.text.contains("88 Cedar Grove Ave, Maplewood"));

    let transcript = agent.transcript();
    let senders: Vec<Sender> = transcript.iter().map(|message| message.sender).collect();
    assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::User, Sender::Bot]);

    let snapshot = agent.metrics().snapshot();
    assert_eq!(snapshot.messages_total, 2);
    assert_eq!(snapshot.replies_total, 1);
    assert_eq!(snapshot.cancelled_total, 1);
}

#[tokio::test]
async fn explicit_cancel_stops_the_reply() {
    let agent = agent_with_delay(200);

    let pending = agent.submit("are you open today?").expect("message");
    pending.cancel();

    assert!(pending
        .reply()
        .await
        .expect("reply task should join")
        .is_none());
    assert!(!agent.is_typing());

    let transcript = agent.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[1].sender, Sender::User);
    assert_eq!(agent.metrics().snapshot().cancelled_total, 1);
}

#[tokio::test]
async fn quick_actions_send_their_canned_prompt() {
    let agent = agent_with_delay(20);

    let pending = agent.quick_action(QuickAction::Contact);
    assert_eq!(pending.user_message.text, "What is your contact number?");
    assert_eq!(pending.user_message.sender, Sender::User);

    let reply = pending
        .reply()
        .await
        .expect("reply task should join")
        .expect("reply should arrive");
    assert!(reply.text.contains("Phone: +1 (555) 210-7733"));

    let snapshot = agent.metrics().snapshot();
    assert_eq!(snapshot.quick_actions_total, 1);
    assert_eq!(snapshot.messages_total, 1);
}

#[tokio::test]
async fn typing_indicator_tracks_pending_reply() {
    let agent = agent_with_delay(100);

    let pending = agent.submit("when do you close?").expect("message");
    assert!(agent.is_typing());

    pending
        .reply()
        .await
        .expect("reply task should join")
        .expect("reply should arrive");
    assert!(!agent.is_typing());
}

#[tokio::test]
async fn metrics_snapshot_counts_conversation() {
    let agent = agent_with_delay(20);

    ask(&agent, "what are your hours?").await;
    ask(&agent, "do you sell gift cards?").await;

    let snapshot = agent.metrics().snapshot();
    assert_eq!(snapshot.messages_total, 2);
    assert_eq!(snapshot.replies_total, 2);
    assert_eq!(snapshot.fallback_total, 1);
    assert_eq!(snapshot.cancelled_total, 0);
    assert_eq!(snapshot.quick_actions_total, 0);
    assert!(snapshot.avg_reply_latency_millis >= 20.0);

    let encoded = serde_json::to_value(&snapshot).expect("snapshot should serialize");
    assert!(encoded.get("messages_total").is_some());
    assert!(encoded.get("avg_reply_latency_millis").is_some());
}
