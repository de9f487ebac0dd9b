use std::{fs, path::PathBuf, sync::Arc};

use anyhow::{Context, bail};
use clap::Args;
use serde_json::Value;
use tracing::info;

use sched_core::{executor::DryRunExecutor, metrics::MetricsHandle, prelude::*};
use sched_model::{ExecutorConfig, ExecutorKind, Kind, Name, Options, PlusConfigs, Workload};
use sched_prometheus::{Encoder, PrometheusMetrics, TextEncoder};

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Executor configuration file: one config object or an array of them
    #[arg(short, long)]
    pub executor: PathBuf,
    /// Workload file: `{"serviceGroup": {..}}` or `{"job": {..}}`
    #[arg(short, long)]
    pub workload: PathBuf,
    /// Executor to evaluate against when the file holds several
    #[arg(short, long)]
    pub name: Option<String>,
    /// Also submit to the dry-run executor and print its response
    #[arg(long)]
    pub create: bool,
    /// Dump prometheus counters to stderr afterwards
    #[arg(long)]
    pub metrics: bool,
}

pub fn run(args: &EvalArgs) -> anyhow::Result<()> {
    let configs_raw = fs::read_to_string(&args.executor)
        .with_context(|| format!("reading {}", args.executor.display()))?;
    let workload_raw = fs::read_to_string(&args.workload)
        .with_context(|| format!("reading {}", args.workload.display()))?;

    let metrics = PrometheusMetrics::new()?;
    let handle: MetricsHandle = Arc::new(metrics.clone());

    let configs = parse_configs(&configs_raw)?;
    let workload = Workload::from_json(&workload_raw)?;
    let manager = ExecutorManager::from_configs(&dry_run_registry(handle.clone())?, &configs)?;
    let cfg = pick(&configs, args.name.as_deref())?;
    let executor = manager.get(&Name::new(cfg.name.as_str()))?;

    let result = SchedulePolicy::new().with_metrics(handle).evaluate(
        &cfg.whole_configs(),
        executor.name(),
        &cfg.kind,
        &workload,
    )?;
    info!(executor = %executor.name(), obj = workload.obj_name(), "workload evaluated");

    let out = if args.create {
        let spec = ExecutorSpec::new(workload, result);
        tokio::runtime::Builder::new_current_thread()
            .build()?
            .block_on(executor.create(&spec))?
    } else {
        serde_json::to_value(&result)?
    };
    println!("{}", serde_json::to_string_pretty(&out)?);

    if args.metrics {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&metrics.gather(), &mut buf)?;
        eprint!("{}", String::from_utf8_lossy(&buf));
    }
    Ok(())
}

/// One config object or an array of them.
fn parse_configs(raw: &str) -> anyhow::Result<Vec<ExecutorConfig>> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => items
            .into_iter()
            .map(|v| ExecutorConfig::from_json(&v.to_string()).map_err(anyhow::Error::from))
            .collect(),
        _ => Ok(vec![ExecutorConfig::from_json(raw)?]),
    }
}

fn pick<'a>(configs: &'a [ExecutorConfig], name: Option<&str>) -> anyhow::Result<&'a ExecutorConfig> {
    match (name, configs) {
        (Some(n), _) => configs
            .iter()
            .find(|c| c.name == n)
            .with_context(|| format!("executor {n} not found in configuration")),
        (None, [only]) => Ok(only),
        (None, []) => bail!("executor configuration is empty"),
        (None, _) => bail!("several executors configured, pick one with --name"),
    }
}

/// Registry with a dry-run constructor for every known kind.
fn dry_run_registry(metrics: MetricsHandle) -> Result<ExecutorRegistry, CoreError> {
    let mut registry = ExecutorRegistry::new().with_metrics(metrics);
    for kind in ExecutorKind::ALL {
        let tag = kind.as_str();
        registry.register(
            tag,
            move |name: &Name, cluster: &str, opts: &Options, plus: Option<&PlusConfigs>| {
                let kind = Kind::new(tag).map_err(|e| ExecutorError::Internal(e.to_string()))?;
                let exec = DryRunExecutor::build(kind, name, cluster, opts, plus)?;
                Ok(Arc::new(exec) as Arc<dyn Executor>)
            },
        )?;
    }
    Ok(registry)
}
