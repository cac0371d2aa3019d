use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "gyeonggi-weather-server/0.1.0";

/// KMA ultra-short-term nowcast endpoint
pub const KMA_API_BASE: &str =
    "https://apis.data.go.kr/1360000/VilageFcstInfoService_2.0/getUltraSrtNcst";

/// Proxy that takes the encoded target URL as its whole query string
pub const CORSPROXY_PREFIX: &str = "https://corsproxy.io/?";

/// Proxy that takes the encoded target URL in its `url` parameter
pub const ALLORIGINS_PREFIX: &str = "https://api.allorigins.win/raw?url=";

/// Proxy that takes the raw target URL as a path suffix
pub const CORS_ANYWHERE_PREFIX: &str = "https://cors-anywhere.herokuapp.com/";

/// Upper bound on a single route attempt
pub const DEFAULT_ROUTE_TIMEOUT: Duration = Duration::from_secs(10);

pub const PAGE_NO: &str = "1";
pub const NUM_OF_ROWS: &str = "1000";
pub const DATA_TYPE: &str = "JSON";

/// Provider result code for a successful call
pub const RESULT_CODE_OK: &str = "00";

/// City marked as the default in the city listing
pub const DEFAULT_CITY: &str = "안산시";

pub const MSG_SELECT_LOCATION: &str = "시/군을 선택해주세요.";
pub const MSG_FETCH_FAILED: &str = "날씨 정보를 가져오는데 실패했습니다.";

pub const LABEL_UNKNOWN: &str = "정보없음";
pub const PLACEHOLDER: &str = "--";
