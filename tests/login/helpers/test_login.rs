use std::sync::{Arc, Once};

use social_sign_in::{
    deep_link::DeepLinkRouter,
    domain::FieldValidator,
    login_manager::LoginManager,
    providers::{ProviderResolver, ProviderType},
    surface::PresentationSurface,
    telemetry::{get_tracing_subscriber, init_tracing_subscriber},
};
use tracing::{level_filters::LevelFilter, Subscriber};

pub struct TestSurface {
    identifier: String,
}

impl TestSurface {
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
        }
    }
}

impl PresentationSurface for TestSurface {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

pub struct TestLogin<R> {
    pub manager: Arc<LoginManager<R>>,
    // 로그인 매니저는 약한 참조만 가지므로 테스트가 표면을 소유한다.
    pub surface: Arc<dyn PresentationSurface>,
}

impl<R> TestLogin<R>
where
    R: ProviderResolver,
{
    /// 표면과 공급자 타입이 설정된 로그인 매니저를 만든다.
    pub fn new(resolver: R, provider_type: ProviderType) -> Self {
        let test_login = Self::without_provider_type(resolver);
        test_login.manager.set_provider_type(provider_type);
        test_login
    }

    pub fn without_provider_type(resolver: R) -> Self {
        Self::set_tracing();

        let surface: Arc<dyn PresentationSurface> = Arc::new(TestSurface::new("main"));
        let manager = LoginManager::new(
            resolver,
            FieldValidator::default(),
            Arc::new(DeepLinkRouter::new()),
        );
        manager.set_presentation_surface(&surface);

        Self {
            manager: Arc::new(manager),
            surface,
        }
    }

    // 테스트 로그 설정을 한다.
    fn set_tracing() {
        // 한번만 실행된다.
        static ONCE: Once = Once::new();
        ONCE.call_once(|| {
            // 트레이트 객체를 사용해서 타입 문제를 해결했다.
            let tracing_subscriber: Box<dyn Subscriber + Send + Sync> = std::env::var("TEST_LOG")
                .map_or(
                    Box::new(get_tracing_subscriber(LevelFilter::ERROR, std::io::sink)),
                    |_| Box::new(get_tracing_subscriber(LevelFilter::TRACE, std::io::stdout)),
                );
            init_tracing_subscriber(tracing_subscriber);
        });
    }
}
