// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Country calling code tables.
//!
//! Keys are calling codes as written after the plus sign, so lookups work on
//! the exact digit string accumulated by the parser.

/// Calling code to English country name.
pub(crate) const CALLING_CODES_EN: &[(&str, &str)] = &[
    ("1", "United States, Canada, Puerto Rico"),
    ("1242", "Bahamas"),
    ("1246", "Barbados"),
    ("1264", "Anguilla"),
    ("1268", "Antigua And Barbuda"),
    ("1284", "British Virgin Islands"),
    ("1340", "U.S. Virgin Islands"),
    ("1345", "Cayman Islands"),
    ("1441", "Bermuda"),
    ("1473", "Grenada"),
    ("1649", "Turks and Caicos Islands"),
    ("1664", "Montserrat"),
    ("1670", "Northern Mariana Islands"),
    ("1671", "Guam"),
    ("1684", "American Samoa"),
    ("1758", "Saint Lucia"),
    ("1767", "Dominica"),
    ("1784", "Saint Vincent and the Grenadines"),
    ("1809", "Dominican Republic"),
    ("1868", "Trinidad and Tobago"),
    ("1869", "Saint Kitts and Nevis"),
    ("1876", "Jamaica"),
    ("20", "Egypt"),
    ("212", "Western Sahara, Morocco"),
    ("213", "Algeria"),
    ("216", "Tunisia"),
    ("218", "Libyan Arab Jamahiriya"),
    ("220", "Gambia"),
    ("221", "Senegal"),
    ("222", "Mauritania"),
    ("223", "Mali"),
    ("224", "Guinea"),
    ("225", "Côte D'ivoire"),
    ("226", "Burkina Faso"),
    ("227", "Niger"),
    ("228", "Togo"),
    ("229", "Benin"),
    ("230", "Mauritius"),
    ("231", "Liberia"),
    ("232", "Sierra Leone"),
    ("233", "Ghana"),
    ("234", "Nigeria"),
    ("235", "Chad"),
    ("236", "Central African Republic"),
    ("237", "Cameroon"),
    ("238", "Cape Verde"),
    ("239", "Sao Tome and Principe"),
    ("240", "Equatorial Guinea"),
    ("241", "Gabon"),
    ("242", "Congo"),
    ("243", "The Democratic Republic Of The Congo"),
    ("244", "Angola"),
    ("245", "Guinea-bissau"),
    ("246", "British Indian Ocean Territory"),
    ("248", "Seychelles"),
    ("249", "Sudan"),
    ("250", "Rwanda"),
    ("251", "Ethiopia"),
    ("252", "Somalia"),
    ("253", "Djibouti"),
    ("254", "Kenya"),
    ("255", "United Republic of Tanzania"),
    ("256", "Uganda"),
    ("257", "Burundi"),
    ("258", "Mozambique"),
    ("260", "Zambia"),
    ("261", "Madagascar"),
    ("262", "Réunion"),
    ("263", "Zimbabwe"),
    ("264", "Namibia"),
    ("265", "Malawi"),
    ("266", "Lesotho"),
    ("267", "Botswana"),
    ("268", "Swaziland"),
    ("269", "Mayotte, Comoros"),
    ("27", "South Africa"),
    ("290", "Saint Helena"),
    ("291", "Eritrea"),
    ("297", "Aruba"),
    ("298", "Faroe Islands"),
    ("299", "Greenland"),
    ("30", "Greece"),
    ("31", "Netherlands"),
    ("32", "Belgium"),
    ("33", "France, France Métropolitaine"),
    ("34", "Spain"),
    ("350", "Gibraltar"),
    ("351", "Portugal"),
    ("352", "Luxembourg"),
    ("353", "Ireland"),
    ("354", "Iceland"),
    ("355", "Albania"),
    ("356", "Malta"),
    ("357", "Cyprus"),
    ("358", "Finland"),
    ("359", "Bulgaria"),
    ("36", "Hungary"),
    ("370", "Lithuania"),
    ("371", "Latvia"),
    ("372", "Estonia"),
    ("373", "Moldova"),
    ("374", "Armenia"),
    ("375", "Belarus"),
    ("376", "Andorra"),
    ("377", "Monaco"),
    ("378", "San Marino"),
    ("379", "Vatican City State"),
    ("380", "Ukraine"),
    ("381", "Serbien"),
    ("382", "Montenegro"),
    ("385", "Croatia"),
    ("386", "Slovenia"),
    ("387", "Bosnia and Herzegovina"),
    ("389", "Macedonia"),
    ("39", "Italy"),
    ("40", "Romania"),
    ("41", "Switzerland"),
    ("420", "Czech Republic"),
    ("421", "Slovakia"),
    ("423", "Liechtenstein"),
    ("43", "Austria"),
    ("44", "United Kingdom, Guernsey, Isle of Man, Jersey"),
    ("45", "Denmark"),
    ("46", "Sweden"),
    ("47", "Norway, Svalbard and Jan Mayen"),
    ("48", "Poland"),
    ("49", "Germany"),
    ("500", "Falkland Islands"),
    ("501", "Belize"),
    ("502", "Guatemala"),
    ("503", "El Salvador"),
    ("504", "Honduras"),
    ("505", "Nicaragua"),
    ("506", "Costa Rica"),
    ("507", "Panama"),
    ("508", "Saint Pierre and Miquelon"),
    ("509", "Haiti"),
    ("51", "Peru"),
    ("52", "Mexico"),
    ("53", "Cuba"),
    ("54", "Argentina"),
    ("55", "Brazil"),
    ("56", "Chile"),
    ("57", "Colombia"),
    ("58", "Venezuela"),
    ("590", "Saint-Barthélemy, Guadeloupe"),
    ("591", "Bolivia"),
    ("592", "Guyana"),
    ("593", "Ecuador"),
    ("594", "French Guiana"),
    ("595", "Paraguay"),
    ("596", "Martinique"),
    ("597", "Suriname"),
    ("598", "Uruguay"),
    ("599", "Netherlands Antilles"),
    ("60", "Malaysia"),
    ("61", "Christmas Island, Australia, Cocos Islands"),
    ("62", "Indonesia"),
    ("63", "Philippines"),
    ("64", "New Zealand, Pitcairn"),
    ("65", "Singapore"),
    ("66", "Thailand"),
    ("670", "East Timor"),
    ("672", "Norfolk Island, Antarctica"),
    ("673", "Brunei Darussalam"),
    ("674", "Nauru"),
    ("675", "Papua New Guinea"),
    ("676", "Tonga"),
    ("677", "Solomon Islands"),
    ("678", "Vanuatu"),
    ("679", "Fiji"),
    ("680", "Palau"),
    ("681", "Wallis And Futuna"),
    ("682", "Cook Islands"),
    ("683", "Niue"),
    ("685", "Samoa"),
    ("686", "Kiribati"),
    ("687", "New Caledonia"),
    ("688", "Tuvalu"),
    ("689", "French Polynesia"),
    ("690", "Tokelau"),
    ("691", "Federated States Of Micronesia"),
    ("692", "Marshall Islands"),
    ("7", "Russian Federation, Kazakhstan"),
    ("81", "Japan"),
    ("82", "Republic Of Korea"),
    ("84", "Viet Nam"),
    ("850", "North Korea"),
    ("852", "Hong Kong"),
    ("853", "Macao"),
    ("855", "Cambodia"),
    ("856", "Lao"),
    ("86", "China"),
    ("880", "Bangladesh"),
    ("886", "Taiwan"),
    ("90", "Turkey"),
    ("91", "India"),
    ("92", "Pakistan"),
    ("93", "Afghanistan"),
    ("94", "Sri Lanka"),
    ("95", "Myanmar"),
    ("960", "Maldives"),
    ("961", "Lebanon"),
    ("962", "Jordan"),
    ("963", "Syrian Arab Republic"),
    ("964", "Iraq"),
    ("965", "Kuwait"),
    ("966", "Saudi Arabia"),
    ("967", "Yemen"),
    ("968", "Oman"),
    ("970", "State of Palestine"),
    ("971", "United Arab Emirates"),
    ("972", "Israel"),
    ("973", "Bahrain"),
    ("974", "Qatar"),
    ("975", "Bhutan"),
    ("976", "Mongolia"),
    ("977", "Nepal"),
    ("98", "Iran"),
    ("992", "Tajikistan"),
    ("993", "Turkmenistan"),
    ("994", "Azerbaijan"),
    ("995", "Georgia"),
    ("996", "Kyrgyzstan"),
    ("998", "Uzbekistan"),
];

/// Calling code to Swedish country name.
pub(crate) const CALLING_CODES_SV: &[(&str, &str)] = &[
    ("1", "Usa, Kanada, Puerto Rico"),
    ("1242", "Bahamas"),
    ("1246", "Barbados"),
    ("1264", "Anguilla"),
    ("1268", "Antigua och barbuda"),
    ("1284", "Brittiska Jungfruöarna"),
    ("1340", "Amerikanska Jungfruöarna"),
    ("1345", "Caymanöarna"),
    ("1441", "Bermuda"),
    ("1473", "Grenada"),
    ("1649", "Turks- och Caicosöarna"),
    ("1664", "Montserrat"),
    ("1670", "Nordmarianerna"),
    ("1671", "Guam"),
    ("1684", "Amerikanska samoa"),
    ("1758", "S:t Lucia"),
    ("1767", "Dominica"),
    ("1784", "S:t Vincent och Grenadinerna"),
    ("1809", "Dominikanska republiken"),
    ("1868", "Trinidad och Tobago"),
    ("1869", "S:t Kitts och Nevis"),
    ("1876", "Jamaica"),
    ("20", "Egypten"),
    ("212", "Västsahara, Marocko"),
    ("213", "Algeriet"),
    ("216", "Tunisien"),
    ("218", "Libyen"),
    ("220", "Gambia"),
    ("221", "Senegal"),
    ("222", "Mauretanien"),
    ("223", "Mali"),
    ("224", "Guinea"),
    ("225", "Elfenbenskusten"),
    ("226", "Burkina faso"),
    ("227", "Niger"),
    ("228", "Togo"),
    ("229", "Benin"),
    ("230", "Mauritius"),
    ("231", "Liberia"),
    ("232", "Sierra leone"),
    ("233", "Ghana"),
    ("234", "Nigeria"),
    ("235", "Tchad"),
    ("236", "Centralafrikanska republiken"),
    ("237", "Kamerun"),
    ("238", "Kap verde"),
    ("239", "Sao Tome och Principe"),
    ("240", "Ekvatorialguinea"),
    ("241", "Gabon"),
    ("242", "Republiken Kongo"),
    ("243", "Demokratiska republiken Kongo"),
    ("244", "Angola"),
    ("245", "Guinea bissau"),
    ("246", "Brittiska terr. i indiska oceanen"),
    ("248", "Seychellerna"),
    ("249", "Sudan"),
    ("250", "Rwanda"),
    ("251", "Etiopien"),
    ("252", "Somalia"),
    ("253", "Djibouti"),
    ("254", "Kenya"),
    ("255", "Tanzania"),
    ("256", "Uganda"),
    ("257", "Burundi"),
    ("258", "Moçambique"),
    ("260", "Zambia"),
    ("261", "Madagaskar"),
    ("262", "Réunion"),
    ("263", "Zimbabwe"),
    ("264", "Namibia"),
    ("265", "Malawi"),
    ("266", "Lesotho"),
    ("267", "Botswana"),
    ("268", "Swaziland"),
    ("269", "Mayotte, Komorerna"),
    ("27", "Sydafrika"),
    ("290", "S:t Helena"),
    ("291", "Eritrea"),
    ("297", "Aruba"),
    ("298", "Färöarna"),
    ("299", "Grönland"),
    ("30", "Grekland"),
    ("31", "Nederländerna"),
    ("32", "Belgien"),
    ("33", "Frankrike, France métropolitaine"),
    ("34", "Spanien"),
    ("350", "Gibraltar"),
    ("351", "Portugal"),
    ("352", "Luxemburg"),
    ("353", "Irland"),
    ("354", "Island"),
    ("355", "Albanien"),
    ("356", "Malta"),
    ("357", "Cypern"),
    ("358", "Finland"),
    ("359", "Bulgarien"),
    ("36", "Ungern"),
    ("370", "Litauen"),
    ("371", "Lettland"),
    ("372", "Estland"),
    ("373", "Moldavien"),
    ("374", "Armenien"),
    ("375", "Vitryssland"),
    ("376", "Andorra"),
    ("377", "Monaco"),
    ("378", "San marino"),
    ("379", "Vatikanstaten"),
    ("380", "Ukraina"),
    ("381", "Serbien"),
    ("382", "Montenegro"),
    ("385", "Kroatien"),
    ("386", "Slovenien"),
    ("387", "Bosnien och Hercegovina"),
    ("389", "Makedonien"),
    ("39", "Italien"),
    ("40", "Rumänien"),
    ("41", "Schweiz"),
    ("420", "Tjeckien"),
    ("421", "Slovakien"),
    ("423", "Liechtenstein"),
    ("43", "Österrike"),
    ("44", "Storbritannien, Guernsey, Isle of Man, Jersey"),
    ("45", "Danmark"),
    ("46", "Sverige"),
    ("47", "Norge, Svalbard"),
    ("48", "Polen"),
    ("49", "Tyskland"),
    ("500", "Falklandsöarna"),
    ("501", "Belize"),
    ("502", "Guatemala"),
    ("503", "El salvador"),
    ("504", "Honduras"),
    ("505", "Nicaragua"),
    ("506", "Costa rica"),
    ("507", "Panama"),
    ("508", "Saint-Pierre och Miquelon"),
    ("509", "Haiti"),
    ("51", "Peru"),
    ("52", "Mexiko"),
    ("53", "Kuba"),
    ("54", "Argentina"),
    ("55", "Brasilien"),
    ("56", "Chile"),
    ("57", "Colombia"),
    ("58", "Venezuela"),
    ("590", "Saint-Barthélemy, Guadeloupe"),
    ("591", "Bolivia"),
    ("592", "Guyana"),
    ("593", "Ecuador"),
    ("594", "Franska Guyana"),
    ("595", "Paraguay"),
    ("596", "Martinique"),
    ("597", "Surinam"),
    ("598", "Uruguay"),
    ("599", "Nederländska antillerna"),
    ("60", "Malaysia"),
    ("61", "Julön, Australien, Kokosöarna"),
    ("62", "Indonesien"),
    ("63", "Filippinerna"),
    ("64", "Nya Zeeland, Pitcairnöarna"),
    ("65", "Singapore"),
    ("66", "Thailand"),
    ("670", "Östtimor"),
    ("672", "Norfolkön, Antarktis"),
    ("673", "Brunei"),
    ("674", "Nauru"),
    ("675", "Papua Nya Guinea"),
    ("676", "Tonga"),
    ("677", "Salomonöarna"),
    ("678", "Vanuatu"),
    ("679", "Fiji"),
    ("680", "Palau"),
    ("681", "Wallis- och futunaöarna"),
    ("682", "Cooköarna"),
    ("683", "Niue"),
    ("685", "Samoa"),
    ("686", "Kiribati"),
    ("687", "Nya Kaledonien"),
    ("688", "Tuvalu"),
    ("689", "Franska Polynesien"),
    ("690", "Tokelauöarna"),
    ("691", "Mikronesiska federationen"),
    ("692", "Marshallöarna"),
    ("7", "Ryssland, Kazakstan"),
    ("81", "Japan"),
    ("82", "Sydkorea"),
    ("84", "Vietnam"),
    ("850", "Nordkorea"),
    ("852", "Hongkong"),
    ("853", "Macau"),
    ("855", "Kambodja"),
    ("856", "Laos"),
    ("86", "Kina"),
    ("880", "Bangladesh"),
    ("886", "Taiwan"),
    ("90", "Turkiet"),
    ("91", "Indien"),
    ("92", "Pakistan"),
    ("93", "Afghanistan"),
    ("94", "Sri Lanka"),
    ("95", "Burma"),
    ("960", "Maldiverna"),
    ("961", "Libanon"),
    ("962", "Jordanien"),
    ("963", "Syrien"),
    ("964", "Irak"),
    ("965", "Kuwait"),
    ("966", "Saudiarabien"),
    ("967", "Jemen"),
    ("968", "Oman"),
    ("970", "Palestina"),
    ("971", "Förenade arabemiraten"),
    ("972", "Israel"),
    ("973", "Bahrain"),
    ("974", "Qatar"),
    ("975", "Bhutan"),
    ("976", "Mongoliet"),
    ("977", "Nepal"),
    ("98", "Iran"),
    ("992", "Tadzjikistan"),
    ("993", "Turkmenistan"),
    ("994", "Azerbajdzjan"),
    ("995", "Georgien"),
    ("996", "Kirgizistan"),
    ("998", "Uzbekistan"),
];

/// Calling code to ISO 3166-1 alpha-2 code. Contains 35818 (Åland) which
/// has no entry in the name tables.
pub(crate) const CALLING_CODES_ALPHA2: &[(&str, &str)] = &[
    ("1", "US"),
    ("1242", "BS"),
    ("1246", "BB"),
    ("1264", "AI"),
    ("1268", "AG"),
    ("1284", "VG"),
    ("1340", "VI"),
    ("1345", "KY"),
    ("1441", "BM"),
    ("1473", "GD"),
    ("1649", "TC"),
    ("1664", "MS"),
    ("1670", "MP"),
    ("1671", "GU"),
    ("1684", "AS"),
    ("1758", "LC"),
    ("1767", "DM"),
    ("1784", "VC"),
    ("1809", "DO"),
    ("1868", "TT"),
    ("1869", "KN"),
    ("1876", "JM"),
    ("20", "EG"),
    ("212", "MA"),
    ("213", "DZ"),
    ("216", "TN"),
    ("218", "LY"),
    ("220", "GM"),
    ("221", "SN"),
    ("222", "MR"),
    ("223", "ML"),
    ("224", "GN"),
    ("225", "CI"),
    ("226", "BF"),
    ("227", "NE"),
    ("228", "TG"),
    ("229", "BJ"),
    ("230", "MU"),
    ("231", "LR"),
    ("232", "SL"),
    ("233", "GH"),
    ("234", "NG"),
    ("235", "TD"),
    ("236", "CF"),
    ("237", "CM"),
    ("238", "CV"),
    ("239", "ST"),
    ("240", "GQ"),
    ("241", "GA"),
    ("242", "CG"),
    ("243", "CD"),
    ("244", "AO"),
    ("245", "GW"),
    ("246", "IO"),
    ("248", "SC"),
    ("249", "SD"),
    ("250", "RW"),
    ("251", "ET"),
    ("252", "SO"),
    ("253", "DJ"),
    ("254", "KE"),
    ("255", "TZ"),
    ("256", "UG"),
    ("257", "BI"),
    ("258", "MZ"),
    ("260", "ZM"),
    ("261", "MG"),
    ("262", "RE"),
    ("263", "ZW"),
    ("264", "NA"),
    ("265", "MW"),
    ("266", "LS"),
    ("267", "BW"),
    ("268", "SZ"),
    ("269", "YT"),
    ("27", "ZA"),
    ("290", "SH"),
    ("291", "ER"),
    ("297", "AW"),
    ("298", "FO"),
    ("299", "GL"),
    ("30", "GR"),
    ("31", "NL"),
    ("32", "BE"),
    ("33", "FR"),
    ("34", "ES"),
    ("350", "GI"),
    ("351", "PT"),
    ("352", "LU"),
    ("353", "IE"),
    ("354", "IS"),
    ("355", "AL"),
    ("356", "MT"),
    ("357", "CY"),
    ("358", "FI"),
    ("35818", "AX"),
    ("359", "BG"),
    ("36", "HU"),
    ("370", "LT"),
    ("371", "LV"),
    ("372", "EE"),
    ("373", "MD"),
    ("374", "AM"),
    ("375", "BY"),
    ("376", "AD"),
    ("377", "MC"),
    ("378", "SM"),
    ("379", "VA"),
    ("380", "UA"),
    ("381", "RS"),
    ("382", "ME"),
    ("385", "HR"),
    ("386", "SI"),
    ("387", "BA"),
    ("389", "MK"),
    ("39", "IT"),
    ("40", "RO"),
    ("41", "CH"),
    ("420", "CZ"),
    ("421", "SK"),
    ("423", "LI"),
    ("43", "AT"),
    ("44", "GB"),
    ("45", "DK"),
    ("46", "SE"),
    ("47", "NO"),
    ("48", "PL"),
    ("49", "DE"),
    ("500", "FK"),
    ("501", "BZ"),
    ("502", "GT"),
    ("503", "SV"),
    ("504", "HN"),
    ("505", "NI"),
    ("506", "CR"),
    ("507", "PA"),
    ("508", "PM"),
    ("509", "HT"),
    ("51", "PE"),
    ("52", "MX"),
    ("53", "CU"),
    ("54", "AR"),
    ("55", "BR"),
    ("56", "CL"),
    ("57", "CO"),
    ("58", "VE"),
    ("590", "BL"),
    ("591", "BO"),
    ("592", "GY"),
    ("593", "EC"),
    ("594", "GF"),
    ("595", "PY"),
    ("596", "MQ"),
    ("597", "SR"),
    ("598", "UY"),
    ("599", "AN"),
    ("60", "MY"),
    ("61", "AU"),
    ("62", "ID"),
    ("63", "PH"),
    ("64", "NZ"),
    ("65", "SG"),
    ("66", "TH"),
    ("670", "TP"),
    ("672", "NF"),
    ("673", "BN"),
    ("674", "NR"),
    ("675", "PG"),
    ("676", "TO"),
    ("677", "SB"),
    ("678", "VU"),
    ("679", "FJ"),
    ("680", "PW"),
    ("681", "WF"),
    ("682", "CK"),
    ("683", "NU"),
    ("685", "WS"),
    ("686", "KI"),
    ("687", "NC"),
    ("688", "TV"),
    ("689", "PF"),
    ("690", "TK"),
    ("691", "FM"),
    ("692", "MH"),
    ("7", "RU"),
    ("81", "JP"),
    ("82", "KR"),
    ("84", "VN"),
    ("850", "KP"),
    ("852", "HK"),
    ("853", "MO"),
    ("855", "KH"),
    ("856", "LA"),
    ("86", "CN"),
    ("880", "BD"),
    ("886", "TW"),
    ("90", "TR"),
    ("91", "IN"),
    ("92", "PK"),
    ("93", "AF"),
    ("94", "LK"),
    ("95", "MM"),
    ("960", "MV"),
    ("961", "LB"),
    ("962", "JO"),
    ("963", "SY"),
    ("964", "IQ"),
    ("965", "KW"),
    ("966", "SA"),
    ("967", "YE"),
    ("968", "OM"),
    ("970", "PS"),
    ("971", "AE"),
    ("972", "IL"),
    ("973", "BH"),
    ("974", "QA"),
    ("975", "BT"),
    ("976", "MN"),
    ("977", "NP"),
    ("98", "IR"),
    ("992", "TJ"),
    ("993", "TM"),
    ("994", "AZ"),
    ("995", "GE"),
    ("996", "KG"),
    ("998", "UZ"),
];
