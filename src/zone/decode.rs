//! Decoding of flat `lat,lon,lat,lon,...` coordinate strings.

use geo::Coord;

use crate::error::ZoneError;

/// Decode a road record's `points` string into (lon, lat) coordinates.
///
/// Tokens are consumed pair-wise, latitude first. A dangling final token
/// is dropped. Any token that is not a finite number fails the whole
/// decode.
pub fn decode_points(raw: &str) -> Result<Vec<Coord<f64>>, ZoneError> {
    let values = raw
        .split(',')
        .map(parse_token)
        .collect::<Result<Vec<f64>, ZoneError>>()?;

    Ok(values
        .chunks_exact(2)
        .map(|pair| Coord {
            x: pair[1],
            y: pair[0],
        })
        .collect())
}

fn parse_token(token: &str) -> Result<f64, ZoneError> {
    match token.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ZoneError::Parse {
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair() {
        let coords = decode_points("48.85,2.35").unwrap();
        assert_eq!(coords, vec![Coord { x: 2.35, y: 48.85 }]);
    }

    #[test]
    fn test_two_pairs_keep_order() {
        let coords = decode_points("48.85,2.35,48.86,2.36").unwrap();
        assert_eq!(
            coords,
            vec![Coord { x: 2.35, y: 48.85 }, Coord { x: 2.36, y: 48.86 }]
        );
    }

    #[test]
    fn test_pairs_are_swapped() {
        let raw = "1,2,3,4,5,6,7,8";
        let tokens: Vec<f64> = raw.split(',').map(|t| t.parse().unwrap()).collect();
        let coords = decode_points(raw).unwrap();

        assert_eq!(coords.len(), tokens.len() / 2);
        for (i, c) in coords.iter().enumerate() {
            assert_eq!(c.x, tokens[2 * i + 1]);
            assert_eq!(c.y, tokens[2 * i]);
        }
    }

    #[test]
    fn test_dangling_token_dropped() {
        let coords = decode_points("48.85,2.35,48.86").unwrap();
        assert_eq!(coords, vec![Coord { x: 2.35, y: 48.85 }]);

        assert!(decode_points("48.85").unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_tolerated() {
        let coords = decode_points(" 48.85, 2.35 ").unwrap();
        assert_eq!(coords, vec![Coord { x: 2.35, y: 48.85 }]);
    }

    #[test]
    fn test_zero_values_kept() {
        let coords = decode_points("0,0").unwrap();
        assert_eq!(coords, vec![Coord { x: 0.0, y: 0.0 }]);
    }

    #[test]
    fn test_non_numeric_token_fails() {
        let err = decode_points("48.85,abc,48.86,2.36").unwrap_err();
        assert_eq!(
            err,
            ZoneError::Parse {
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_dangling_token_still_fails() {
        assert!(decode_points("48.85,2.35,x").is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(decode_points("NaN,2.35").is_err());
        assert!(decode_points("48.85,inf").is_err());
    }

    #[test]
    fn test_empty_string_fails() {
        let err = decode_points("").unwrap_err();
        assert_eq!(
            err,
            ZoneError::Parse {
                token: String::new()
            }
        );
    }
}
