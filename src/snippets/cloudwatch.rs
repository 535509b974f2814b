use crate::utils::error::{Result, SnippetError};
use aws_sdk_cloudwatch::Client;

pub async fn list_metrics(client: &Client, namespace: Option<&str>) -> Result<()> {
    let mut next_token = None;
    let mut count = 0;

    loop {
        let output = client
            .list_metrics()
            .set_namespace(namespace.map(str::to_string))
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| SnippetError::service("cloudwatch", e))?;

        for metric in output.metrics() {
            println!(
                "{:<32} {}",
                metric.namespace().unwrap_or_default(),
                metric.metric_name().unwrap_or_default()
            );
            count += 1;
        }
        match output.next_token {
            Some(token) => next_token = Some(token),
            None => break,
        }
    }
    println!("Found {} metric(s)", count);
    Ok(())
}

pub async fn describe_alarms(client: &Client) -> Result<()> {
    let output = client
        .describe_alarms()
        .send()
        .await
        .map_err(|e| SnippetError::service("cloudwatch", e))?;

    for alarm in output.metric_alarms() {
        println!(
            "{:<40} {}",
            alarm.alarm_name().unwrap_or_default(),
            alarm.state_value().map(|s| s.as_str()).unwrap_or("-")
        );
    }
    Ok(())
}
