//! Embedded sample inputs, used when no input paths are given.
//!
//! Zones 1–5 form a small snow-sensitive core; 20 and 21 are an outlying
//! pair with no path to the core.

pub const ZONES_CSV: &str = "\
Primary Zone,Backup Zones\n\
1,\"2,3\"\n\
2,\"1,4\"\n\
3,\"1,5\"\n\
4,2\n\
5,3\n\
20,21\n\
21,\n\
";

pub const TRIPS_CSV: &str = "\
TTM Number,First Pickup Zone,Last Dropoff Zone,First Pickup Time,Last Dropoff Time,KM\n\
R-101,1,2,06:00:00,06:35:00,18.4\n\
R-102,2,4,06:50:00,07:30:00,22.1\n\
R-103,3,5,06:10:00,06:40:00,15.0\n\
R-104,5,3,06:55:00,07:25:00,14.2\n\
R-105,4,2,07:45:00,08:20:00,21.7\n\
R-106,1,1,07:40:00,08:05:00,9.8\n\
R-107,2,1,08:40:00,09:15:00,19.3\n\
R-108,3,1,08:20:00,08:45:00,11.6\n\
R-109,1,3,09:35:00,10:10:00,16.9\n\
R-110,20,21,07:00:00,07:40:00,34.5\n\
R-111,21,20,08:00:00,08:45:00,36.0\n\
R-112,20,20,09:00:00,09:50:00,58.2\n\
R-113,4,4,10:30:00,11:00:00,12.4\n\
R-114,1,2,14:00:00,14:30:00,17.5\n\
";
