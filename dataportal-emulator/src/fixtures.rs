use serde_json::{json, Value};

/// Default installation rows: five units across three buildings, with
/// installation dates spanning 2023 and 2024. Every field the portal
/// serves is present, all values strings.
pub fn installations() -> Vec<Value> {
    vec![
        json!({
            "elevatorNo": "8088276",
            "buldNm": "한빛타워",
            "address1": "서울특별시 강남구 테헤란로 123",
            "address2": "역삼동 737",
            "sido": "서울특별시",
            "sigungu": "강남구",
            "elvtrAsignNo": "1호기",
            "elvtrDiv": "승객용",
            "elvtrForm": "엘리베이터",
            "elvtrDetailForm": "전기식",
            "elvtrKindNm": "승객용 엘리베이터",
            "installationPlace": "본관",
            "shuttleFloorCnt": "15",
            "ratedSpeed": "1.75",
            "liveLoad": "1000",
            "ratedCap": "15",
            "companyNm": "현대엘리베이터(주)",
            "frstInstallationDe": "20230510",
            "installationDe": "20230510",
            "bdmgtSn": "1168010100100370000",
            "buldPrposLclas": "업무시설",
            "buldPrposSclas": "사무소"
        }),
        json!({
            "elevatorNo": "8088277",
            "buldNm": "한빛타워",
            "address1": "서울특별시 강남구 테헤란로 123",
            "address2": "역삼동 737",
            "sido": "서울특별시",
            "sigungu": "강남구",
            "elvtrAsignNo": "2호기",
            "elvtrDiv": "승객용",
            "elvtrForm": "엘리베이터",
            "elvtrDetailForm": "전기식",
            "elvtrKindNm": "승객용 엘리베이터",
            "installationPlace": "본관",
            "shuttleFloorCnt": "15",
            "ratedSpeed": "1.75",
            "liveLoad": "1000",
            "ratedCap": "15",
            "companyNm": "현대엘리베이터(주)",
            "frstInstallationDe": "20230510",
            "installationDe": "20230510",
            "bdmgtSn": "1168010100100370000",
            "buldPrposLclas": "업무시설",
            "buldPrposSclas": "사무소"
        }),
        json!({
            "elevatorNo": "7731024",
            "buldNm": "세종오피스텔",
            "address1": "서울특별시 송파구 올림픽로 42",
            "address2": "잠실동 12-3",
            "sido": "서울특별시",
            "sigungu": "송파구",
            "elvtrAsignNo": "1호기",
            "elvtrDiv": "승객용",
            "elvtrForm": "엘리베이터",
            "elvtrDetailForm": "전기식",
            "elvtrKindNm": "승객용 엘리베이터",
            "installationPlace": "주동",
            "shuttleFloorCnt": "22",
            "ratedSpeed": "2.5",
            "liveLoad": "1150",
            "ratedCap": "17",
            "companyNm": "티케이엘리베이터코리아(주)",
            "frstInstallationDe": "20240115",
            "installationDe": "20240115",
            "bdmgtSn": "1171010100101240000",
            "buldPrposLclas": "공동주택",
            "buldPrposSclas": "오피스텔"
        }),
        json!({
            "elevatorNo": "9120458",
            "buldNm": "해운대센텀빌",
            "address1": "부산광역시 해운대구 센텀중앙로 55",
            "address2": "우동 1496",
            "sido": "부산광역시",
            "sigungu": "해운대구",
            "elvtrAsignNo": "화물1호기",
            "elvtrDiv": "화물용",
            "elvtrForm": "엘리베이터",
            "elvtrDetailForm": "유압식",
            "elvtrKindNm": "화물용 엘리베이터",
            "installationPlace": "지하주차장",
            "shuttleFloorCnt": "4",
            "ratedSpeed": "0.5",
            "liveLoad": "3000",
            "ratedCap": "0",
            "companyNm": "오티스엘리베이터(유)",
            "frstInstallationDe": "20240220",
            "installationDe": "20240220",
            "bdmgtSn": "2635010100114960000",
            "buldPrposLclas": "판매시설",
            "buldPrposSclas": "상점"
        }),
        json!({
            "elevatorNo": "9120459",
            "buldNm": "해운대센텀빌",
            "address1": "부산광역시 해운대구 센텀중앙로 55",
            "address2": "우동 1496",
            "sido": "부산광역시",
            "sigungu": "해운대구",
            "elvtrAsignNo": "에스컬레이터1",
            "elvtrDiv": "에스컬레이터",
            "elvtrForm": "에스컬레이터",
            "elvtrDetailForm": "계단형",
            "elvtrKindNm": "에스컬레이터",
            "installationPlace": "1층 로비",
            "shuttleFloorCnt": "2",
            "ratedSpeed": "0.5",
            "liveLoad": "0",
            "ratedCap": "0",
            "companyNm": "오티스엘리베이터(유)",
            "frstInstallationDe": "20241120",
            "installationDe": "20241120",
            "bdmgtSn": "2635010100114960000",
            "buldPrposLclas": "판매시설",
            "buldPrposSclas": "상점"
        }),
    ]
}

/// Default inspection rows: two completed inspections for one site, one
/// unscheduled request, one failed inspection. The request-side fields are
/// always present; the rest mirrors how far each case has progressed.
pub fn inspections() -> Vec<Value> {
    vec![
        json!({
            "mngNo": "M240100123",
            "elvtrMngNo": "E240100123-01",
            "reqstDe": "20240215",
            "reqstBuldNm": "한빛타워",
            "reqstBuldAdress": "서울특별시 강남구 테헤란로 123",
            "reqstInspctKindNm": "정기검사",
            "reqstCnt": "2",
            "installationDivNm": "승강기",
            "buldNm": "한빛타워",
            "address": "서울특별시 강남구 테헤란로 123",
            "elvtrAsignNo": "1호기",
            "elvtrUniqueNo": "8088276",
            "elvtrDivNm": "승객용",
            "elvtrForm": "엘리베이터",
            "elvtrDetailForm": "전기식",
            "elvtrKindNm": "승객용 엘리베이터",
            "installationPlace": "본관",
            "elvtrModel": "WBSS-1000",
            "mnfcturCpnyNm": "현대엘리베이터(주)",
            "mntCpnyCd": "C10482",
            "frstInstallationDe": "20230510",
            "installationDe": "20230510",
            "recptnDe": "20240216",
            "cstmrGuidanceNo": "2024-021234",
            "inspctKindNm": "정기검사",
            "inspctCnt": "1",
            "inspctFee": "121000",
            "inspctCompanyNm": "한국승강기안전공단",
            "asignDe": "20240228",
            "arrivalTime": "0930",
            "inspctDe": "20240301",
            "inspctResult": "합격",
            "mainInspctrNm": "김안전",
            "subInspctrNm": "박검사",
            "applcFromDt": "20240301",
            "applcToDt": "20250228",
            "recptnMgtNo": "R2024-000812"
        }),
        json!({
            "mngNo": "M240100123",
            "elvtrMngNo": "E240100123-02",
            "reqstDe": "20240215",
            "reqstBuldNm": "한빛타워",
            "reqstBuldAdress": "서울특별시 강남구 테헤란로 123",
            "reqstInspctKindNm": "정기검사",
            "reqstCnt": "2",
            "installationDivNm": "승강기",
            "buldNm": "한빛타워",
            "address": "서울특별시 강남구 테헤란로 123",
            "elvtrAsignNo": "2호기",
            "elvtrUniqueNo": "8088277",
            "elvtrDivNm": "승객용",
            "elvtrForm": "엘리베이터",
            "elvtrDetailForm": "전기식",
            "elvtrKindNm": "승객용 엘리베이터",
            "installationPlace": "본관",
            "elvtrModel": "WBSS-1000",
            "mnfcturCpnyNm": "현대엘리베이터(주)",
            "mntCpnyCd": "C10482",
            "frstInstallationDe": "20230510",
            "installationDe": "20230510",
            "recptnDe": "20240216",
            "cstmrGuidanceNo": "2024-021235",
            "inspctKindNm": "정기검사",
            "inspctCnt": "1",
            "inspctFee": "121000",
            "inspctCompanyNm": "한국승강기안전공단",
            "asignDe": "20240228",
            "arrivalTime": "1100",
            "inspctDe": "20240301",
            "inspctResult": "조건부합격",
            "mainInspctrNm": "김안전",
            "subInspctrNm": "박검사",
            "conditionalBeDt": "20240302",
            "conditionalEnDt": "20240531",
            "failCd1": "F-2024-7731",
            "recptnMgtNo": "R2024-000813"
        }),
        json!({
            "mngNo": "M240200456",
            "reqstDe": "20240405",
            "reqstBuldNm": "세종오피스텔",
            "reqstBuldAdress": "서울특별시 송파구 올림픽로 42",
            "reqstInspctKindNm": "설치검사",
            "reqstCnt": "1"
        }),
        json!({
            "mngNo": "M240300789",
            "elvtrMngNo": "E240300789-01",
            "reqstDe": "20240510",
            "reqstBuldNm": "해운대센텀빌",
            "reqstBuldAdress": "부산광역시 해운대구 센텀중앙로 55",
            "reqstInspctKindNm": "수시검사",
            "reqstCnt": "1",
            "buldNm": "해운대센텀빌",
            "address": "부산광역시 해운대구 센텀중앙로 55",
            "elvtrUniqueNo": "9120458",
            "elvtrDivNm": "화물용",
            "inspctKindNm": "수시검사",
            "inspctCompanyNm": "한국승강기안전공단",
            "asignDe": "20240524",
            "inspctDe": "20240527",
            "inspctResult": "불합격",
            "mainInspctrNm": "이점검",
            "failCd1": "F-2024-9245",
            "recptnMgtNo": "R2024-001577"
        }),
    ]
}
