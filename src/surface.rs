/// 공급자가 로그인 화면을 띄울 UI 표면
///
/// 실제 위젯은 호스트 셸이 소유한다.
/// 로그인 매니저는 약한 참조만 들고 있다가 로그인할 때 공급자에게 넘긴다.
pub trait PresentationSurface: Send + Sync {
    /// 로그에 남길 식별자
    fn identifier(&self) -> &str;
}
