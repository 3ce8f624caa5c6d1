//! Small championship fixture written to a temporary directory.
//!
//! 2020 has two races, 2021 three (two with sprints), 2022 none. A handful of
//! rows reference entities that do not exist and must be dropped at load.

#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use f1_explorer::query::QueryEngine;
use f1_explorer::store::{Dataset, DatasetStore};
use tempfile::TempDir;

pub const STATUS_FINISHED: u32 = 1;
pub const STATUS_ACCIDENT: u32 = 3;
pub const STATUS_ENGINE: u32 = 5;

pub fn write_table(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(format!("{name}.csv")), contents).expect("write fixture table");
}

pub fn fixture_dir() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let root = dir.path();

    write_table(root, "seasons", "year,url\n2020,http://a\n2021,http://b\n2022,http://c\n");

    write_table(
        root,
        "circuits",
        "circuitId,circuitRef,name,location,country,lat,lng,alt,url\n\
         1,monza,Autodromo Nazionale di Monza,Monza,Italy,45.6156,9.28111,162,http://m\n\
         2,silverstone,Silverstone Circuit,Silverstone,UK,52.0786,-1.01694,153,http://s\n\
         3,imola,Autodromo Enzo e Dino Ferrari,Imola,Italy,44.3439,11.7167,37,http://i\n\
         4,ghost,Ghost Ring,\\N,\\N,\\N,\\N,\\N,http://g\n\
         5,oldring,Oldring,Adenau,Germany,50.3356,6.9475,578,http://o\n",
    );

    write_table(
        root,
        "races",
        "raceId,year,round,circuitId,name,date,time,url,sprint_date,sprint_time\n\
         1,2020,1,5,Eifel Grand Prix,2020-10-11,13:10:00,http://r1,\\N,\\N\n\
         2,2020,2,1,Italian Grand Prix,2020-09-06,13:10:00,http://r2,\\N,\\N\n\
         12,2021,3,3,Emilia Romagna Grand Prix,2021-04-18,13:00:00,http://r12,\\N,\\N\n\
         10,2021,1,2,British Grand Prix,2021-07-18,14:00:00,http://r10,2021-07-17,\\N\n\
         11,2021,2,1,Italian Grand Prix,2021-09-12,13:00:00,http://r11,2021-09-11,\\N\n\
         13,2021,2,1,Duplicate Round Grand Prix,\\N,\\N,http://r13,\\N,\\N\n\
         98,1999,1,1,Orphan Season Grand Prix,1999-05-01,\\N,http://r98,\\N,\\N\n\
         99,2021,4,42,Unknown Circuit Grand Prix,2021-12-12,\\N,http://r99,\\N,\\N\n",
    );

    let mut drivers = String::from("driverId,driverRef,number,code,forename,surname,dob,nationality,url\n");
    drivers.push_str("1,hamilton,44,HAM,Lewis,Hamilton,1985-01-07,British,http://d1\n");
    drivers.push_str("2,verstappen,33,VER,Max,Verstappen,1997-09-30,Dutch,http://d2\n");
    drivers.push_str("3,bottas,77,BOT,Valtteri,Bottas,1989-08-28,Finnish,http://d3\n");
    drivers.push_str("4,raikkonen,\\N,\\N,Kimi,Räikkönen,1979-10-17,Finnish,http://d4\n");
    for id in 5..=20 {
        writeln!(drivers, "{id},driver{id},\\N,D{id:02},Test,Driver{id},\\N,\\N,http://d{id}").unwrap();
    }
    write_table(root, "drivers", &drivers);

    write_table(
        root,
        "constructors",
        "constructorId,constructorRef,name,nationality,url\n\
         1,mercedes,Mercedes,German,http://c1\n\
         2,red_bull,Red Bull,Austrian,http://c2\n\
         3,ferrari,Ferrari,Italian,http://c3\n",
    );

    write_table(
        root,
        "status",
        "statusId,status\n1,Finished\n3,Accident\n5,Engine\n11,+1 Lap\n",
    );

    write_table(root, "results", &results_table());

    write_table(
        root,
        "sprint_results",
        "resultId,raceId,driverId,constructorId,number,grid,position,positionText,positionOrder,points,laps,time,milliseconds,fastestLap,fastestLapTime,statusId\n\
         1,10,2,2,33,2,1,1,1,3,17,25:38.426,1538426,14,1:30.013,1\n\
         2,10,1,1,44,1,2,2,2,2,17,+1.430,1539856,15,1:30.500,1\n\
         3,10,3,1,77,3,3,3,3,1,17,+7.502,1545928,16,1:30.900,1\n\
         4,10,4,2,7,4,\\N,R,4,0,2,\\N,\\N,\\N,\\N,3\n\
         5,11,1,1,44,1,1,1,1,3,18,27:54.078,1674078,10,1:25.000,1\n\
         6,11,2,2,33,2,2,2,2,2,18,+2.000,1676078,11,1:25.400,1\n",
    );

    write_table(
        root,
        "driver_standings",
        "driverStandingsId,raceId,driverId,points,position,positionText,wins\n\
         1,1,1,25,1,1,1\n\
         2,1,2,18,2,2,0\n\
         3,2,2,44,1,1,1\n\
         4,2,1,26,2,2,1\n\
         10,10,1,25,1,1,1\n\
         11,10,2,18,2,2,0\n\
         12,10,3,15,3,3,0\n\
         13,10,4,0,4,4,0\n\
         20,11,2,43,1,1,1\n\
         21,11,1,43,2,2,1\n\
         22,11,3,30,3,3,0\n\
         23,11,4,12,4,4,0\n\
         30,12,3,61,3,3,0\n\
         31,12,1,68,1,1,2\n\
         32,12,4,12,4,4,0\n\
         33,12,2,61,2,2,1\n\
         34,99,1,93,1,1,3\n",
    );

    write_table(
        root,
        "constructor_standings",
        "constructorStandingsId,raceId,constructorId,points,position,positionText,wins\n\
         1,2,2,50,1,1,1\n\
         2,2,1,50,1,1,1\n\
         10,10,1,40,1,1,1\n\
         11,10,2,18,2,2,0\n\
         20,12,2,100,1,1,1\n\
         21,12,1,90,2,2,2\n\
         22,12,3,5,3,3,0\n",
    );

    write_table(
        root,
        "lap_times",
        "raceId,driverId,lap,position,time,milliseconds\n\
         10,1,3,1,1:30.500,90500\n\
         10,1,1,1,1:35.000,95000\n\
         10,1,2,1,1:31.250,\\N\n\
         10,1,3,1,1:29.000,89000\n\
         10,2,1,2,1:36.100,96100\n\
         10,77,1,5,1:40.000,100000\n",
    );

    write_table(
        root,
        "pit_stops",
        "raceId,driverId,stop,lap,time,duration,milliseconds\n\
         10,1,1,12,14:20:01,22.552,22552\n\
         10,2,1,14,14:22:40,16:44.718,\\N\n\
         10,1,2,30,14:48:13,23.001,\\N\n",
    );

    write_table(
        root,
        "constructor_results",
        "constructorResultsId,raceId,constructorId,points,status\n\
         1,10,1,27,\\N\n\
         2,10,2,18,\\N\n\
         3,10,9,0,\\N\n",
    );

    dir
}

/// Race 10 has a DNF; race 12 has twenty entries, 15 finished, 3 crashed, 2 engines.
fn results_table() -> String {
    let mut out = String::from(
        "resultId,raceId,driverId,constructorId,number,grid,position,positionText,positionOrder,points,laps,time,milliseconds,fastestLap,rank,fastestLapTime,fastestLapSpeed,statusId\n",
    );
    let mut id = 0;
    let mut row = |out: &mut String, race: u32, driver: u32, constructor: u32, grid: &str, position: Option<u32>, order: u32, points: f64, laps: u32, status: u32| {
        id += 1;
        let position = position.map(|p| p.to_string()).unwrap_or_else(|| "\\N".to_string());
        let text = if position == "\\N" { "R".to_string() } else { position.clone() };
        writeln!(
            out,
            "{id},{race},{driver},{constructor},\\N,{grid},{position},{text},{order},{points},{laps},\\N,\\N,\\N,\\N,\\N,\\N,{status}"
        )
        .unwrap();
    };

    row(&mut out, 1, 1, 1, "1", Some(1), 1, 25.0, 60, STATUS_FINISHED);
    row(&mut out, 1, 2, 2, "2", Some(2), 2, 18.0, 60, STATUS_FINISHED);
    row(&mut out, 2, 2, 2, "1", Some(1), 1, 25.0, 53, STATUS_FINISHED);
    row(&mut out, 2, 1, 1, "2", Some(2), 2, 1.0, 53, STATUS_FINISHED);

    // Retirement listed first in the file; ordering comes from positionOrder.
    row(&mut out, 10, 4, 2, "4", None, 4, 0.0, 2, STATUS_ACCIDENT);
    row(&mut out, 10, 1, 1, "1", Some(1), 1, 25.0, 52, STATUS_FINISHED);
    row(&mut out, 10, 3, 1, "\\N", Some(3), 3, 15.0, 52, STATUS_FINISHED);
    row(&mut out, 10, 2, 2, "2", Some(2), 2, 18.0, 52, STATUS_FINISHED);

    row(&mut out, 11, 2, 2, "2", Some(1), 1, 25.0, 53, STATUS_FINISHED);
    row(&mut out, 11, 1, 1, "1", Some(2), 2, 18.0, 53, STATUS_FINISHED);
    row(&mut out, 11, 3, 1, "3", Some(3), 3, 15.0, 53, STATUS_FINISHED);
    row(&mut out, 11, 4, 2, "4", Some(4), 4, 12.0, 53, STATUS_FINISHED);

    for driver in 1..=20u32 {
        let constructor = match driver {
            1 | 3 => 1,
            2 | 4 => 2,
            _ => 3,
        };
        let (position, status) = match driver {
            1..=15 => (Some(driver), STATUS_FINISHED),
            16..=18 => (None, STATUS_ACCIDENT),
            _ => (None, STATUS_ENGINE),
        };
        let laps = if position.is_some() { 63 } else { 20 };
        row(&mut out, 12, driver, constructor, &driver.to_string(), position, driver, 0.0, laps, status);
    }

    // Dangling: dropped race, unknown driver.
    row(&mut out, 99, 1, 1, "1", Some(1), 1, 25.0, 58, STATUS_FINISHED);
    row(&mut out, 10, 77, 3, "20", Some(5), 5, 0.0, 52, STATUS_FINISHED);
    out
}

pub fn load_fixture() -> (TempDir, Dataset) {
    let dir = fixture_dir();
    let dataset = DatasetStore::new(dir.path()).load().expect("fixture loads");
    (dir, dataset)
}

pub fn engine() -> (TempDir, QueryEngine) {
    let (dir, dataset) = load_fixture();
    (dir, QueryEngine::new(Arc::new(dataset)))
}
