use sched_model::ExecutorKind;
use serde_json::{Value, json};

pub fn run(as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&listing())?);
    } else {
        for kind in ExecutorKind::ALL {
            println!("{:<10} {}", kind.as_str(), kind.schedule_class());
        }
    }
    Ok(())
}

fn listing() -> Value {
    ExecutorKind::ALL
        .iter()
        .map(|k| {
            json!({
                "kind": k.as_str(),
                "scheduleClass": k.schedule_class().to_string(),
                "jobExecutor": k.is_job_executor(),
                "acceptsBigdata": k.accepts_bigdata(),
            })
        })
        .collect()
}
