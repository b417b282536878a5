// self
use crate::obs::{AcquisitionPath, FlowKind, FlowOutcome};

/// Records a flow outcome via the global metrics recorder (when enabled).
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"msauth_bridge_flow_total",
			"flow" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Records which acquisition path the orchestrator entered (when enabled).
pub fn record_acquisition_path(path: AcquisitionPath) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!("msauth_bridge_acquisition_total", "path" => path.as_str()).increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = path;
	}
}
