use std::time::Duration;

use apiconnector::cancellation::Cancellation;
use apiconnector::probe::{Error, Prober};
use apiconnector::target::Status;
use tokio::net::TcpListener;

use crate::common::environment::Environment;
use crate::common::{closed_port, init_logging};

fn prober() -> Prober {
    Prober::new(Duration::from_secs(5)).expect("it should build the HTTP client")
}

mod http_targets {
    use super::*;

    #[tokio::test]
    async fn it_should_report_a_success_code_as_ok() {
        init_logging();

        let env = Environment::start().await;

        let outcome = prober().probe(&env.url("/health"), &Cancellation::new()).await;

        assert!(outcome.error.is_none());
        assert_eq!(outcome.status, Status::Ok);
        assert!(outcome.latency > Duration::ZERO);

        env.stop();
    }

    /// Non-success answers are reported but do not make the target fail.
    #[tokio::test]
    async fn it_should_report_a_not_found_answer_without_an_error() {
        init_logging();

        let env = Environment::start().await;

        let outcome = prober().probe(&env.url("/missing"), &Cancellation::new()).await;

        assert!(outcome.error.is_none());
        assert_eq!(outcome.status.to_string(), "HTTP 404");

        env.stop();
    }

    #[tokio::test]
    async fn it_should_not_follow_redirects() {
        init_logging();

        let env = Environment::start().await;

        let outcome = prober().probe(&env.url("/moved"), &Cancellation::new()).await;

        assert!(outcome.error.is_none());
        assert_eq!(outcome.status, Status::Http(302));

        env.stop();
    }

    #[tokio::test]
    async fn it_should_fail_when_the_service_does_not_answer_in_time() {
        init_logging();

        let env = Environment::start().await;
        let prober = Prober::new(Duration::from_millis(200)).unwrap();

        let outcome = prober.probe(&env.url("/slow"), &Cancellation::new()).await;

        assert!(matches!(outcome.error, Some(Error::Http { .. })));
        assert_eq!(outcome.status, Status::Fail);
        assert_eq!(outcome.latency, Duration::ZERO);

        env.stop();
    }

    #[tokio::test]
    async fn it_should_fail_when_the_connection_is_refused() {
        init_logging();

        let url = format!("http://127.0.0.1:{}/", closed_port().await);

        let outcome = prober().probe(&url, &Cancellation::new()).await;

        let error = outcome.error.expect("the probe should fail");
        assert!(error.to_string().starts_with("HTTP error: "), "error: {error}");
        assert_eq!(outcome.status, Status::Fail);
    }

    #[tokio::test]
    async fn it_should_abandon_the_request_when_cancelled() {
        init_logging();

        let env = Environment::start().await;
        let cancellation = Cancellation::new();

        let canceller = {
            let cancellation = cancellation.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                cancellation.cancel();
            })
        };

        let outcome = tokio::time::timeout(Duration::from_secs(2), prober().probe(&env.url("/slow"), &cancellation))
            .await
            .expect("the probe should return as soon as it is cancelled");

        assert!(matches!(outcome.error, Some(Error::Cancelled)));
        assert_eq!(outcome.status, Status::Pending);

        canceller.await.unwrap();
        env.stop();
    }
}

mod tcp_targets {
    use super::*;

    #[tokio::test]
    async fn it_should_report_an_open_port_as_reachable() {
        init_logging();

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("127.0.0.1:{}", listener.local_addr().unwrap().port());

        let outcome = prober().probe(&url, &Cancellation::new()).await;

        assert!(outcome.error.is_none());
        assert_eq!(outcome.status, Status::Ok);
    }

    #[tokio::test]
    async fn it_should_fail_when_the_port_is_closed() {
        init_logging();

        let port = closed_port().await;
        let url = format!("127.0.0.1:{port}");

        let outcome = prober().probe(&url, &Cancellation::new()).await;

        let error = outcome.error.expect("the probe should fail");
        assert!(matches!(error, Error::PortUnreachable { .. }));
        assert!(error.to_string().starts_with(&format!("Port {port} unreachable: ")), "error: {error}");
        assert_eq!(outcome.status, Status::Fail);
    }

    #[tokio::test]
    async fn it_should_check_the_port_before_the_http_endpoint() {
        init_logging();

        let port = closed_port().await;
        let url = format!("http://127.0.0.1:{port}");

        let outcome = prober().probe(&url, &Cancellation::new()).await;

        assert!(matches!(outcome.error, Some(Error::PortUnreachable { .. })));
    }

    #[tokio::test]
    async fn it_should_check_both_the_port_and_the_http_endpoint() {
        init_logging();

        let env = Environment::start().await;
        let url = format!("http://{}", env.addr);

        let outcome = prober().probe(&url, &Cancellation::new()).await;

        assert!(outcome.error.is_none());
        assert_eq!(outcome.status, Status::Http(404));

        env.stop();
    }
}
